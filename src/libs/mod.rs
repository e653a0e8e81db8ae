//! Core library modules for the takt application.
//!
//! ## Features
//!
//! - **Timer Engine**: Session state machine, pause ledger, duration math
//! - **Safety Supervision**: Overlong/midnight checks and stale recovery
//! - **Goal Progress**: Period windows and live-session aggregation
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **User Interface**: Console rendering and duration formatting

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod entry;
pub mod formatter;
pub mod goal;
pub mod ledger;
pub mod messages;
pub mod monitor;
pub mod storage;
pub mod timer;
pub mod view;

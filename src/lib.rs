//! # Takt - Timer and Activity Keeping Tool
//!
//! A command-line utility for tracking time spent on activities with a
//! pause-aware timer engine, safety supervision, and goal progress.
//!
//! ## Features
//!
//! - **Timer Engine**: Start, pause, resume, and stop a single tracked session
//! - **Pause Ledger**: Chronological pause intervals with exact accounting
//! - **Safety Monitor**: Forces a stop on overlong sessions and day boundaries
//! - **Goal Progress**: Daily and weekly targets including the live session
//! - **Work/Break Cycling**: Optional phase indicator for periodic reminders
//! - **Fallback Persistence**: Remote record store with local SQLite fallback
//!
//! ## Usage
//!
//! ```rust,no_run
//! use takt::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;

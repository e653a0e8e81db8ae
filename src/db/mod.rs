//! Database layer for the takt application.
//!
//! A small SQLite persistence layer with one module per entity and schema
//! creation on first use. The timer engine writes through the storage port;
//! displays and goal aggregation read from here directly.
//!
//! ## Modules
//!
//! - **db**: Connection management against the application data directory
//! - **sessions**: The at-most-one persisted timer session
//! - **entries**: Immutable completed entries minted by stop transitions
//! - **goals**: Daily/weekly goal targets
//!
//! ## Usage
//!
//! ```rust,no_run
//! use takt::db::entries::Entries;
//! use chrono::Local;
//!
//! let entries = Entries::new()?;
//! let today = entries.fetch_daily(Local::now().date_naive())?;
//! # anyhow::Ok(())
//! ```

pub mod db;
pub mod entries;
pub mod goals;
pub mod sessions;

//! Run the safety monitor against the active session.
//!
//! Polls the live session until it stops - either through a safety
//! violation detected here or a user-invoked stop from another process,
//! observed as the persisted session disappearing. Stale-session recovery
//! already ran when the timer loaded.

use crate::commands::load_timer;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::libs::monitor::Monitor;
use crate::msg_info;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub async fn cmd() -> Result<()> {
    // Route monitor output through tracing when debug logging is requested
    if is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    let mut timer = load_timer().await?;

    if timer.session().is_none() {
        msg_info!(Message::NoActiveSession);
        return Ok(());
    }

    let mut monitor = Monitor::new(timer.config().clone());
    monitor.run(&mut timer).await
}

//! Pause the running timer session.

use crate::commands::load_timer;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let mut timer = load_timer().await?;

    match timer.session() {
        None => {
            msg_warning!(Message::TimerNotRunning);
            return Ok(());
        }
        Some(session) if session.is_paused => {
            msg_warning!(Message::TimerAlreadyPaused);
            return Ok(());
        }
        Some(_) => {}
    }

    let now = Local::now().naive_local();
    timer.pause(now).await?;
    msg_success!(Message::TimerPaused(now.format("%H:%M:%S").to_string()));
    Ok(())
}

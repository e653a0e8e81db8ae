//! Resume a paused timer session.

use crate::commands::load_timer;
use crate::libs::formatter::format_seconds;
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
        Some(session) if !session.is_paused => {
            msg_warning!(Message::TimerNotPaused);
            return Ok(());
        }
        Some(_) => {}
    }

    let now = Local::now().naive_local();
    let closed = timer.resume(now).await?;
    msg_success!(Message::TimerResumed(format_seconds(closed)));
    Ok(())
}

//! Stop the session and record the completed entry.

use crate::commands::load_timer;
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StopArgs {
    /// Optional note to record on the completed entry
    #[arg(long, short)]
    description: Option<String>,
}

pub async fn cmd(args: StopArgs) -> Result<()> {
    let mut timer = load_timer().await?;

    let now = Local::now().naive_local();
    match timer.stop(now, args.description).await? {
        Some(entry) => {
            msg_success!(Message::EntryRecorded {
                duration: format_seconds(entry.duration),
                category: format!("{}/{}", entry.category_id, entry.subcategory_id),
            });
        }
        None => msg_warning!(Message::TimerNotRunning),
    }
    Ok(())
}

//! Start a new timer session for an activity.

use crate::commands::load_timer;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Category of the activity to track
    #[arg(long, short)]
    category: String,

    /// Subcategory of the activity to track
    #[arg(long, short)]
    subcategory: String,

    /// Enable work/break phase cycling for this session
    #[arg(long)]
    cycle: bool,
}

pub async fn cmd(args: StartArgs) -> Result<()> {
    let mut timer = load_timer().await?;

    // The exclusivity rule: a rejected start leaves the running session
    // completely unmodified.
    if timer.session().is_some() {
        msg_warning!(Message::TimerAlreadyRunning);
        return Ok(());
    }

    let now = Local::now().naive_local();
    timer.start(&args.category, &args.subcategory, args.cycle, now).await?;
    msg_success!(Message::TimerStarted(format!("{}/{}", args.category, args.subcategory)));
    Ok(())
}

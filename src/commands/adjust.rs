//! Correct the running session's start time.
//!
//! A mis-started timer can be fixed retroactively by moving its start
//! earlier or later. The edit never touches the pause ledger: pause
//! timestamps stay anchored to absolute wall-clock values, and an edit that
//! would move the start into the future or past the earliest pause is
//! rejected without any state change.

use crate::commands::load_timer;
use crate::libs::messages::Message;
use crate::libs::timer::TimerError;
use crate::{msg_error, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct AdjustArgs {
    /// New start time for the running session (HH:MM or HH:MM:SS, today)
    #[arg(long, short)]
    start: String,
}

pub async fn cmd(args: AdjustArgs) -> Result<()> {
    let mut timer = load_timer().await?;

    if timer.session().is_none() {
        msg_warning!(Message::TimerNotRunning);
        return Ok(());
    }

    let now = Local::now().naive_local();
    let new_start = parse_time(&args.start, now)?;

    match timer.edit_start_time(new_start, now).await {
        Ok(()) => msg_success!(Message::TimerStartEdited(new_start.format("%H:%M:%S").to_string())),
        Err(err) => match err.downcast_ref::<TimerError>() {
            Some(TimerError::InvalidTimeEdit) => {
                if new_start > now {
                    msg_error!(Message::StartTimeInFuture);
                } else {
                    msg_error!(Message::StartTimeBeforePause);
                }
            }
            _ => return Err(err),
        },
    }
    Ok(())
}

fn parse_time(time_str: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(time_str, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time_str, "%H:%M"))
        .map_err(|_| crate::msg_error_anyhow!(Message::InvalidDateFormat(time_str.to_string())))?;
    Ok(now.date().and_time(time))
}

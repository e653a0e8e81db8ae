//! Display the current session state and recorded entries.

use crate::commands::load_timer;
use crate::db::entries::Entries;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Date to list entries for (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,
}

pub async fn cmd(args: StatusArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let timer = load_timer().await?;
    let now = Local::now().naive_local();

    match timer.session() {
        Some(session) => {
            msg_print!(Message::SessionStatusTitle, true);
            View::session(session, now)?;
        }
        None => msg_info!(Message::NoActiveSession),
    }

    let entries = Entries::new()?.fetch_daily(date)?;
    if entries.is_empty() {
        msg_info!(Message::EntriesNotFoundForDate(date.format("%Y-%m-%d").to_string()));
    } else {
        msg_print!(Message::EntriesTitle(date.format("%Y-%m-%d").to_string()), true);
        View::entries(&entries)?;
    }
    Ok(())
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str == "today" {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| crate::msg_error_anyhow!(Message::InvalidDateFormat(date_str.to_string())))
    }
}

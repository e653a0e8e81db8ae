use crate::libs::entry::{CompletedEntry, EntryGroup};
use crate::libs::formatter::{format_seconds, FormattedEvent};
use crate::libs::goal::{GoalProgress, GoalTarget};
use crate::libs::ledger::PausePeriod;
use crate::libs::timer::TimerSession;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the running session with its live elapsed time and ledger.
    pub fn session(session: &TimerSession, now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["CATEGORY", "SUBCATEGORY", "STARTED", "STATE", "ACTIVE", "PAUSED"]);
        table.add_row(row![
            session.category_id,
            session.subcategory_id,
            session.start_time.format("%H:%M:%S"),
            if session.is_paused { "paused" } else { "running" },
            format_seconds(session.live_elapsed(now)),
            format_seconds(session.total_paused_secs),
        ]);
        table.printstd();

        if !session.pause_periods.is_empty() {
            Self::pauses(&session.pause_periods)?;
        }
        Ok(())
    }

    pub fn pauses(periods: &[PausePeriod]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "START", "END"]);
        for (index, period) in periods.iter().enumerate() {
            table.add_row(row![
                index + 1,
                period.start.format("%H:%M:%S"),
                period.end.map_or_else(|| "-".to_string(), |e| e.format("%H:%M:%S").to_string()),
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn entries(entries: &Vec<CompletedEntry>) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "START", "END", "DURATION"]);
        for FormattedEvent { id, start, end, duration } in entries.format() {
            table.add_row(row![id, start, end, duration]);
        }
        table.printstd();
        Ok(())
    }

    pub fn goals(goals: &[(GoalTarget, GoalProgress)]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "CATEGORY", "SUBCATEGORY", "PERIOD", "TARGET", "CURRENT", "PERCENT"]);
        for (goal, progress) in goals {
            table.add_row(row![
                goal.id,
                goal.category_id,
                goal.subcategory_id.as_deref().unwrap_or("-"),
                goal.period.label(),
                format_seconds(goal.target_minutes * 60),
                format_seconds(progress.current_seconds),
                format!("{}%", progress.percent),
            ]);
        }
        table.printstd();
        Ok(())
    }
}

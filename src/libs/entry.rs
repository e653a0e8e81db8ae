//! Completed time entries minted by the timer engine.

use crate::libs::formatter::{format_seconds, FormattedEvent};
use crate::libs::ledger::PausePeriod;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An immutable record of a finished timer session.
///
/// Minted exactly once per session by the stop transition and owned by the
/// record store afterwards; the timer engine never mutates an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedEntry {
    /// Identifier of the tracked category.
    pub category_id: String,
    /// Identifier of the tracked subcategory.
    pub subcategory_id: String,
    /// When the session started.
    pub start_time: NaiveDateTime,
    /// When the session stopped.
    pub end_time: NaiveDateTime,
    /// Active duration in whole seconds, pauses already subtracted.
    pub duration: i64,
    /// Optional free-form note recorded at stop time.
    pub description: Option<String>,
    /// Snapshot of the pause ledger, kept for later inspection.
    pub pause_periods: Vec<PausePeriod>,
    /// Marks entries that materialize a break rather than work time.
    pub is_pause: bool,
}

/// A trait for formatting a collection of entries for table display.
pub trait EntryGroup {
    fn format(&self) -> Vec<FormattedEvent>;
}

impl EntryGroup for Vec<CompletedEntry> {
    fn format(&self) -> Vec<FormattedEvent> {
        self.iter()
            .enumerate()
            .map(|(index, entry)| FormattedEvent {
                id: (index + 1) as i32,
                start: entry.start_time.format("%H:%M").to_string(),
                end: entry.end_time.format("%H:%M").to_string(),
                duration: format_seconds(entry.duration),
            })
            .collect()
    }
}

//! Time duration formatting utilities for user-friendly display.
//!
//! Converts durations into the "HH:MM" strings used across status tables,
//! goal summaries, and safety monitor notices. Negative durations are
//! displayed as zero rather than producing confusing output.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A pause or entry pre-formatted for table display.
///
/// All time values are already rendered to strings so the structure can be
/// fed directly to the table renderer without further formatting decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedEvent {
    /// Sequential identifier used for ordering rows.
    pub id: i32,
    /// Formatted start time (e.g. "09:00").
    pub start: String,
    /// Formatted end time, or "-" when the event is still open.
    pub end: String,
    /// Formatted duration, or "--:--" when it cannot be determined.
    pub duration: String,
}

/// Formats a `chrono::Duration` as a zero-padded "HH:MM" string.
///
/// Seconds are discarded, not rounded, to stay consistent with persisted
/// whole-second durations. Negative durations render as "00:00".
///
/// # Examples
///
/// ```rust
/// use takt::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats an integer number of seconds as "HH:MM".
pub fn format_seconds(seconds: i64) -> String {
    format_duration(&Duration::seconds(seconds))
}

//! Pure duration arithmetic for the timer engine.
//!
//! Converts a session's start instant, an end instant (or "now" for a live
//! session), and its pause ledger into the active duration in whole seconds.
//! These functions are deterministic and side-effect free; all clamping and
//! truncation rules for persisted durations live here so every consumer
//! (timer transitions, safety monitor, goal aggregation) agrees on the math.
//!
//! ## Accounting Rules
//!
//! - Fractional seconds are truncated, never rounded, to match the integer
//!   second durations stored on completed entries.
//! - A pause with no end is treated as extending to the `end` instant.
//! - Pause time never pushes the result below zero.

use crate::libs::ledger::PausePeriod;
use chrono::NaiveDateTime;

/// Non-negative wall-clock difference between two instants in whole seconds.
pub fn clock_seconds(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds().max(0)
}

/// Active duration between `start` and `end`, with pause time subtracted.
///
/// Each pause contributes `(closed_end ?? end) - pause_start` to the
/// subtrahend; the result is floored at zero so pathological ledgers (e.g.
/// a pause recorded before an edited start time) cannot produce a negative
/// duration.
pub fn active_seconds(start: NaiveDateTime, end: NaiveDateTime, periods: &[PausePeriod]) -> i64 {
    let elapsed = clock_seconds(start, end);
    let paused: i64 = periods
        .iter()
        .map(|p| clock_seconds(p.start, p.end.unwrap_or(end)))
        .sum();

    (elapsed - paused.min(elapsed)).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn clock_seconds_is_non_negative() {
        assert_eq!(clock_seconds(at(10, 0, 0), at(9, 0, 0)), 0);
        assert_eq!(clock_seconds(at(9, 0, 0), at(10, 0, 30)), 3630);
    }

    #[test]
    fn active_seconds_subtracts_closed_pauses() {
        let periods = vec![PausePeriod {
            start: at(10, 10, 0),
            end: Some(at(10, 15, 0)),
        }];
        assert_eq!(active_seconds(at(10, 0, 0), at(11, 0, 0), &periods), 3300);
    }

    #[test]
    fn open_pause_extends_to_end() {
        let periods = vec![PausePeriod {
            start: at(10, 30, 0),
            end: None,
        }];
        assert_eq!(active_seconds(at(10, 0, 0), at(11, 0, 0), &periods), 1800);
    }

    #[test]
    fn pauses_never_add_time() {
        let periods = vec![PausePeriod {
            start: at(9, 0, 0),
            end: Some(at(12, 0, 0)),
        }];
        let start = at(10, 0, 0);
        let end = at(10, 30, 0);
        assert_eq!(active_seconds(start, end, &periods), 0);
        assert!(active_seconds(start, end, &periods) <= clock_seconds(start, end));
    }
}

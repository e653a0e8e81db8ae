//! Pause interval ledger attached to a running timer session.
//!
//! A ledger is a chronologically ordered list of `{start, end-or-open}`
//! intervals. Intervals are non-overlapping by construction: the state
//! machine always closes the open tail before opening a new pause. The
//! operations here are plain list manipulations with no side effects; the
//! timer state machine enforces the preconditions (e.g. "no pause is
//! currently open") before calling in.

use crate::libs::duration::clock_seconds;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single pause interval inside a session.
///
/// `end` is `None` while the pause is still open. At most one interval in a
/// ledger is open at any time, and it is always the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PausePeriod {
    /// The timestamp when the pause started.
    pub start: NaiveDateTime,
    /// The timestamp when the pause ended, if it has been closed.
    pub end: Option<NaiveDateTime>,
}

/// Appends a new open interval starting at `at`.
pub fn open_pause(periods: &mut Vec<PausePeriod>, at: NaiveDateTime) {
    periods.push(PausePeriod { start: at, end: None });
}

/// Closes the most recent open interval at `at`.
///
/// Returns the duration in seconds of the interval just closed, or 0 without
/// touching the ledger when no interval is open.
pub fn close_pause(periods: &mut [PausePeriod], at: NaiveDateTime) -> i64 {
    match periods.iter_mut().rev().find(|p| p.end.is_none()) {
        Some(open) => {
            open.end = Some(at);
            clock_seconds(open.start, at)
        }
        None => 0,
    }
}

/// Deletes the interval at `index`, used for user-driven correction of a
/// historical pause. Out-of-range indices are ignored.
pub fn remove_pause(periods: &mut Vec<PausePeriod>, index: usize) {
    if index < periods.len() {
        periods.remove(index);
    }
}

/// Overwrites one interval's bounds and re-sorts the ledger by start time,
/// since an edit can reorder the interval relative to its siblings.
pub fn replace_pause(periods: &mut [PausePeriod], index: usize, new_start: NaiveDateTime, new_end: Option<NaiveDateTime>) {
    if let Some(period) = periods.get_mut(index) {
        period.start = new_start;
        period.end = new_end;
        periods.sort_by_key(|p| p.start);
    }
}

/// Sum of `end - start` over every closed interval in the ledger.
///
/// The currently open pause, if any, is deliberately excluded; its duration
/// is only known once it closes.
pub fn total_closed_seconds(periods: &[PausePeriod]) -> i64 {
    periods
        .iter()
        .filter_map(|p| p.end.map(|end| clock_seconds(p.start, end)))
        .sum()
}

/// Returns true if the ledger has an open tail interval.
pub fn has_open_pause(periods: &[PausePeriod]) -> bool {
    periods.last().is_some_and(|p| p.end.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn open_then_close_accounts_duration() {
        let mut periods = Vec::new();
        open_pause(&mut periods, at(10, 0));
        assert!(has_open_pause(&periods));

        let closed = close_pause(&mut periods, at(10, 5));
        assert_eq!(closed, 300);
        assert!(!has_open_pause(&periods));
        assert_eq!(total_closed_seconds(&periods), 300);
    }

    #[test]
    fn close_without_open_is_a_no_op() {
        let mut periods = vec![PausePeriod {
            start: at(9, 0),
            end: Some(at(9, 10)),
        }];
        let before = periods.clone();
        assert_eq!(close_pause(&mut periods, at(10, 0)), 0);
        assert_eq!(periods, before);
    }

    #[test]
    fn replace_resorts_by_start() {
        let mut periods = vec![
            PausePeriod { start: at(9, 0), end: Some(at(9, 10)) },
            PausePeriod { start: at(11, 0), end: Some(at(11, 10)) },
        ];
        replace_pause(&mut periods, 1, at(8, 0), Some(at(8, 10)));
        assert_eq!(periods[0].start, at(8, 0));
        assert_eq!(periods[1].start, at(9, 0));
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut periods = vec![
            PausePeriod { start: at(9, 0), end: Some(at(9, 10)) },
            PausePeriod { start: at(10, 0), end: Some(at(10, 10)) },
            PausePeriod { start: at(11, 0), end: None },
        ];
        remove_pause(&mut periods, 1);
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[1].start, at(11, 0));

        // Out-of-range index leaves the ledger untouched
        remove_pause(&mut periods, 5);
        assert_eq!(periods.len(), 2);
    }
}

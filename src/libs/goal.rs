//! Goal progress aggregation over completed entries and the live session.
//!
//! A goal targets a number of minutes per day or per week for one category,
//! optionally narrowed to a single subcategory. Progress is a read-only
//! computation: completed entries inside the period window are summed and,
//! when the live session matches the goal, its live elapsed time counts
//! toward the target in real time.

use crate::libs::entry::CompletedEntry;
use crate::libs::timer::TimerSession;
use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The period a goal target is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Daily,
    Weekly,
}

impl PeriodKind {
    pub fn label(&self) -> &'static str {
        match self {
            PeriodKind::Daily => "daily",
            PeriodKind::Weekly => "weekly",
        }
    }
}

/// A target number of minutes for one category within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalTarget {
    /// Database identifier, 0 for targets not yet stored.
    pub id: i64,
    pub category_id: String,
    /// Narrows the goal to one subcategory when present.
    pub subcategory_id: Option<String>,
    pub period: PeriodKind,
    pub target_minutes: i64,
}

/// Computed progress toward a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalProgress {
    /// Accumulated active seconds inside the current period window.
    pub current_seconds: i64,
    /// Whole percent of the target, floored and clamped to 100.
    pub percent: u8,
}

/// The half-open `[start, end)` window of the period containing `now`.
///
/// Daily windows cover the local calendar day; weekly windows start on
/// Monday 00:00.
pub fn period_window(period: PeriodKind, now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let today = now.date();
    match period {
        PeriodKind::Daily => {
            let start = today.and_hms_opt(0, 0, 0).unwrap();
            (start, start + Duration::days(1))
        }
        PeriodKind::Weekly => {
            let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            let start = monday.and_hms_opt(0, 0, 0).unwrap();
            (start, start + Duration::days(7))
        }
    }
}

fn matches_goal(goal: &GoalTarget, category_id: &str, subcategory_id: &str) -> bool {
    goal.category_id == category_id
        && goal
            .subcategory_id
            .as_deref()
            .is_none_or(|sub| sub == subcategory_id)
}

/// Computes current progress for a goal at `now`.
///
/// Completed entries count when their category (and subcategory, for
/// scoped goals) matches and their start time falls inside the window;
/// break entries are skipped. A matching live session started inside the
/// window contributes its live elapsed time.
pub fn compute_progress(
    goal: &GoalTarget,
    entries: &[CompletedEntry],
    live: Option<&TimerSession>,
    now: NaiveDateTime,
) -> GoalProgress {
    let (window_start, window_end) = period_window(goal.period, now);
    let in_window = |start: NaiveDateTime| start >= window_start && start < window_end;

    let mut current_seconds: i64 = entries
        .iter()
        .filter(|e| !e.is_pause)
        .filter(|e| matches_goal(goal, &e.category_id, &e.subcategory_id))
        .filter(|e| in_window(e.start_time))
        .map(|e| e.duration)
        .sum();

    if let Some(session) = live {
        if matches_goal(goal, &session.category_id, &session.subcategory_id) && in_window(session.start_time) {
            current_seconds += session.live_elapsed(now);
        }
    }

    let target_seconds = goal.target_minutes * 60;
    let percent = if target_seconds > 0 {
        (current_seconds * 100 / target_seconds).clamp(0, 100) as u8
    } else {
        0
    };

    GoalProgress { current_seconds, percent }
}

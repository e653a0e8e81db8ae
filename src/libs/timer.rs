//! The timer state machine: the stateful core of the application.
//!
//! A [`TimerSession`] moves through `Idle -> Running -> Paused -> Running ->
//! ... -> Idle`, where `Idle` means no session exists. All transitions take
//! an explicit `now` instant so they are deterministic, and every
//! precondition violation is a typed no-op ([`TimerError`]) rather than a
//! state corruption: a transition is fully computed in memory before any
//! persistence happens.
//!
//! The [`Timer`] coordinator is the single writer of the session state. It
//! owns the optional session plus the storage port and persists the session
//! after every transition - saving on mutation, deleting when the session
//! returns to idle, and appending exactly one [`CompletedEntry`] on stop.
//!
//! ## Core Invariant
//!
//! At any instant the live active time equals
//! `(now - start_time) - total_paused_secs - open_pause`, clamped at zero.
//! While paused the open pause extends to `now`, so the elapsed value is
//! frozen until resume.

use crate::libs::config::TimerConfig;
use crate::libs::duration::active_seconds;
use crate::libs::entry::CompletedEntry;
use crate::libs::ledger::{self, PausePeriod};
use crate::libs::monitor::Monitor;
use crate::libs::storage::Storage;
use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Typed outcomes for transitions invoked in an unsupported state.
///
/// These are always local no-ops for the session; callers decide whether
/// and how to surface them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// The operation is not valid in the current timer state.
    #[error("operation is not valid in the current timer state")]
    PreconditionFailed,
    /// A start-time edit would move the session into the future or past
    /// its earliest recorded pause.
    #[error("invalid start time edit")]
    InvalidTimeEdit,
}

/// The side of the work/break cycle a session is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Break => "break",
        }
    }
}

/// Optional work/break cycling sub-state.
///
/// Independent of the pause ledger: the phase indicator exists purely to
/// drive periodic reminders and never affects active-duration accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseCycle {
    pub phase: Phase,
    pub work_secs: i64,
    pub break_secs: i64,
    /// Seconds spent in the current phase, updated by a presentation-layer
    /// ticker and reset to zero on every switch.
    pub elapsed_secs: i64,
}

impl PhaseCycle {
    pub fn new(work_secs: i64, break_secs: i64) -> Self {
        PhaseCycle {
            phase: Phase::Work,
            work_secs,
            break_secs,
            elapsed_secs: 0,
        }
    }

    /// Toggles the phase and resets the phase clock.
    pub fn switch(&mut self) {
        self.phase = match self.phase {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        };
        self.elapsed_secs = 0;
    }

    /// Length of the current phase in seconds.
    pub fn target_secs(&self) -> i64 {
        match self.phase {
            Phase::Work => self.work_secs,
            Phase::Break => self.break_secs,
        }
    }
}

/// The single in-progress timer session.
///
/// At most one instance exists at a time, owned by the [`Timer`]. The
/// category identifiers are immutable for the session's lifetime; the start
/// time may be retroactively edited but never into the future.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSession {
    pub category_id: String,
    pub subcategory_id: String,
    pub start_time: NaiveDateTime,
    pub is_paused: bool,
    /// Mirrors the still-open tail of `pause_periods` while paused.
    pub pause_start_time: Option<NaiveDateTime>,
    /// Chronologically ordered, non-overlapping pause intervals.
    pub pause_periods: Vec<PausePeriod>,
    /// Running sum of all closed pause intervals in seconds; the currently
    /// open pause is not included until it closes.
    pub total_paused_secs: i64,
    pub cycle: Option<PhaseCycle>,
}

impl TimerSession {
    pub fn new(category_id: &str, subcategory_id: &str, cycle: Option<PhaseCycle>, now: NaiveDateTime) -> Self {
        TimerSession {
            category_id: category_id.to_string(),
            subcategory_id: subcategory_id.to_string(),
            start_time: now,
            is_paused: false,
            pause_start_time: None,
            pause_periods: Vec::new(),
            total_paused_secs: 0,
            cycle,
        }
    }

    /// Opens a pause at `now`. Fails if the session is already paused.
    pub fn pause(&mut self, now: NaiveDateTime) -> Result<(), TimerError> {
        if self.is_paused {
            return Err(TimerError::PreconditionFailed);
        }
        ledger::open_pause(&mut self.pause_periods, now);
        self.pause_start_time = Some(now);
        self.is_paused = true;
        Ok(())
    }

    /// Closes the open pause at `now` and folds its duration into the
    /// accumulated pause total. Fails if the session is not paused.
    pub fn resume(&mut self, now: NaiveDateTime) -> Result<i64, TimerError> {
        if !self.is_paused {
            return Err(TimerError::PreconditionFailed);
        }
        let closed = ledger::close_pause(&mut self.pause_periods, now);
        self.total_paused_secs += closed;
        self.pause_start_time = None;
        self.is_paused = false;
        Ok(closed)
    }

    /// Consumes the session and mints the one completed entry for it.
    ///
    /// A still-open pause is closed at `end` first so it is accounted for
    /// without flipping the session back to running.
    pub fn finish(mut self, end: NaiveDateTime, description: Option<String>) -> CompletedEntry {
        if self.is_paused {
            let closed = ledger::close_pause(&mut self.pause_periods, end);
            self.total_paused_secs += closed;
            self.pause_start_time = None;
            self.is_paused = false;
        }
        let duration = active_seconds(self.start_time, end, &self.pause_periods);
        CompletedEntry {
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            start_time: self.start_time,
            end_time: end,
            duration,
            description,
            pause_periods: self.pause_periods,
            is_pause: false,
        }
    }

    /// Stop variant for monitor-forced ends.
    ///
    /// A forced end can precede the open pause: an overlong session is
    /// capped at the instant its active time hit the ceiling, which for a
    /// paused session lies before the pause began. Such a pause falls
    /// wholly outside the recorded range and is dropped instead of being
    /// closed at `end`.
    pub fn finish_forced(mut self, end: NaiveDateTime, description: Option<String>) -> CompletedEntry {
        if self.is_paused && self.pause_start_time.is_some_and(|p| p >= end) {
            // the open pause is always the ledger tail
            self.pause_periods.pop();
            self.pause_start_time = None;
            self.is_paused = false;
        }
        self.finish(end, description)
    }

    /// Retroactively corrects the session's start time.
    ///
    /// The new start must not lie in the future, and must not pass the
    /// earliest recorded pause - pause timestamps are anchored to absolute
    /// wall-clock values and never shift with a start edit.
    pub fn edit_start_time(&mut self, new_start: NaiveDateTime, now: NaiveDateTime) -> Result<(), TimerError> {
        if new_start > now {
            return Err(TimerError::InvalidTimeEdit);
        }
        if self.pause_periods.first().is_some_and(|p| new_start > p.start) {
            return Err(TimerError::InvalidTimeEdit);
        }
        self.start_time = new_start;
        Ok(())
    }

    /// Toggles the work/break phase. Fails when cycling is not enabled.
    pub fn switch_phase(&mut self) -> Result<Phase, TimerError> {
        match self.cycle.as_mut() {
            Some(cycle) => {
                cycle.switch();
                Ok(cycle.phase)
            }
            None => Err(TimerError::PreconditionFailed),
        }
    }

    /// Records the phase clock value supplied by a presentation ticker.
    pub fn set_phase_elapsed(&mut self, seconds: i64) -> Result<(), TimerError> {
        match self.cycle.as_mut() {
            Some(cycle) => {
                cycle.elapsed_secs = seconds;
                Ok(())
            }
            None => Err(TimerError::PreconditionFailed),
        }
    }

    /// Live active time in seconds at `now`.
    ///
    /// While paused the open ledger tail is treated as ending at `now`,
    /// so the value does not grow until resume.
    pub fn live_elapsed(&self, now: NaiveDateTime) -> i64 {
        active_seconds(self.start_time, now, &self.pause_periods)
    }
}

/// Coordinator owning the at-most-one session and its persistence.
///
/// All writes to the session state flow through these methods; other
/// components (safety monitor, goal aggregation, status display) only read.
/// Mutating transitions are applied in memory before persistence and a
/// remote storage failure never rolls them back; stop transitions release
/// the session only once the local writes land.
pub struct Timer {
    config: TimerConfig,
    storage: Storage,
    session: Option<TimerSession>,
}

impl Timer {
    /// Creates a timer bound to a storage port, restoring any persisted
    /// session so a restarted process continues where it left off.
    ///
    /// Every CLI invocation is a process startup, so loading also runs the
    /// stale-session recovery check: a session left over from an earlier
    /// day, or one already past the ceiling, is force-stopped here before
    /// any command can observe it.
    pub async fn load(config: TimerConfig, storage: Storage) -> Result<Self> {
        let session = storage.load_session()?;
        let mut timer = Timer { config, storage, session };
        Monitor::recover_startup(&mut timer).await?;
        Ok(timer)
    }

    /// Re-reads the persisted session, adopting transitions made by other
    /// processes. Long-lived observers treat the stored row as
    /// authoritative; their in-memory copy goes stale between ticks.
    pub fn reload(&mut self) -> Result<()> {
        self.session = self.storage.load_session()?;
        Ok(())
    }

    pub fn session(&self) -> Option<&TimerSession> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Starts a new session. Fails with [`TimerError::PreconditionFailed`]
    /// if one is already active - at most one session exists system-wide,
    /// and a rejected start leaves the existing session untouched.
    pub async fn start(
        &mut self,
        category_id: &str,
        subcategory_id: &str,
        work_break_enabled: bool,
        now: NaiveDateTime,
    ) -> Result<()> {
        if self.session.is_some() {
            return Err(TimerError::PreconditionFailed.into());
        }
        let cycle = work_break_enabled.then(|| PhaseCycle::new(self.config.work_phase_secs, self.config.break_phase_secs));
        let session = TimerSession::new(category_id, subcategory_id, cycle, now);
        self.storage.save_session(&session).await?;
        self.session = Some(session);
        Ok(())
    }

    pub async fn pause(&mut self, now: NaiveDateTime) -> Result<()> {
        let session = self.session.as_mut().ok_or(TimerError::PreconditionFailed)?;
        session.pause(now)?;
        self.persist().await
    }

    /// Resumes a paused session, returning the closed pause duration.
    pub async fn resume(&mut self, now: NaiveDateTime) -> Result<i64> {
        let session = self.session.as_mut().ok_or(TimerError::PreconditionFailed)?;
        let closed = session.resume(now)?;
        self.persist().await?;
        Ok(closed)
    }

    /// Stops the session at `now`. See [`Timer::stop_at`].
    pub async fn stop(&mut self, now: NaiveDateTime, description: Option<String>) -> Result<Option<CompletedEntry>> {
        self.stop_at(now, description).await
    }

    /// Stops the session with an explicit end instant and mints the
    /// completed entry. Returns `None` when no session is running - a
    /// user-invoked stop and a safety monitor stop racing through here are
    /// serialized by the single-writer state, so the second caller simply
    /// observes idle.
    ///
    /// The in-memory session is released only after the entry insert and
    /// the session delete both succeed; a failed write leaves the session
    /// in place, consistent with storage.
    pub async fn stop_at(&mut self, end: NaiveDateTime, description: Option<String>) -> Result<Option<CompletedEntry>> {
        let Some(session) = self.session.as_ref() else {
            return Ok(None);
        };
        let entry = session.clone().finish(end, description);
        self.storage.append_entry(&entry).await?;
        self.storage.clear_session().await?;
        self.session = None;
        Ok(Some(entry))
    }

    /// Monitor-forced stop. See [`TimerSession::finish_forced`] for how an
    /// open pause past the forced end is handled; the persistence ordering
    /// matches [`Timer::stop_at`].
    pub async fn stop_forced(&mut self, end: NaiveDateTime) -> Result<Option<CompletedEntry>> {
        let Some(session) = self.session.as_ref() else {
            return Ok(None);
        };
        let entry = session.clone().finish_forced(end, None);
        self.storage.append_entry(&entry).await?;
        self.storage.clear_session().await?;
        self.session = None;
        Ok(Some(entry))
    }

    pub async fn edit_start_time(&mut self, new_start: NaiveDateTime, now: NaiveDateTime) -> Result<()> {
        let session = self.session.as_mut().ok_or(TimerError::PreconditionFailed)?;
        session.edit_start_time(new_start, now)?;
        self.persist().await
    }

    pub async fn switch_phase(&mut self) -> Result<Phase> {
        let session = self.session.as_mut().ok_or(TimerError::PreconditionFailed)?;
        let phase = session.switch_phase()?;
        self.persist().await?;
        Ok(phase)
    }

    pub async fn set_phase_elapsed(&mut self, seconds: i64) -> Result<()> {
        let session = self.session.as_mut().ok_or(TimerError::PreconditionFailed)?;
        session.set_phase_elapsed(seconds)?;
        self.persist().await
    }

    /// Live active time of the current session, or 0 when idle.
    pub fn live_elapsed(&self, now: NaiveDateTime) -> i64 {
        self.session.as_ref().map_or(0, |s| s.live_elapsed(now))
    }

    async fn persist(&self) -> Result<()> {
        match &self.session {
            Some(session) => self.storage.save_session(session).await,
            None => self.storage.clear_session().await,
        }
    }
}

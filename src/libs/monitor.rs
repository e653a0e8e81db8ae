//! Safety monitor supervising the live timer session.
//!
//! A periodic process that inspects the running session and forces the same
//! stop transition the CLI would invoke when a safety bound is violated:
//!
//! 1. **Overlong session**: the live active time exceeds the configured
//!    ceiling. The forced stop caps the end instant so the recorded entry's
//!    active duration equals exactly the ceiling.
//! 2. **Day boundary**: the wall clock enters the buffer window before
//!    local midnight. A re-entry guard keeps this from firing more than
//!    once per crossing; the guard resets once the clock passes midnight.
//! 3. **Stale session** (startup only): a persisted session whose start
//!    date is no longer today, or whose elapsed time already exceeds the
//!    ceiling, is closed before any interaction. Day-crossed sessions are
//!    ended at 23:59:59 of their start day so no entry spans midnight.
//!
//! The checks compare against the local wall clock only; clock skew is not
//! specially handled. None of them bypass the state machine's invariants,
//! and a forced stop racing a user stop resolves through the single-writer
//! session state.

use crate::libs::config::TimerConfig;
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::libs::timer::{Timer, TimerSession};
use crate::{msg_debug, msg_info, msg_warning};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDateTime};
use tokio::time;

/// Why the monitor forced a session to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The session's active time exceeded the configured ceiling.
    MaxDuration,
    /// The wall clock reached the buffer window before local midnight.
    DayBoundary,
    /// A persisted session from an earlier day was found at startup.
    StaleSession,
}

impl StopReason {
    /// Advisory notice for the presentation layer; carries no retry
    /// semantics.
    pub fn notice(&self, duration_secs: i64) -> Message {
        let duration = format_seconds(duration_secs);
        match self {
            StopReason::MaxDuration => Message::StoppedMaxDuration(duration),
            StopReason::DayBoundary => Message::StoppedDayBoundary(duration),
            StopReason::StaleSession => Message::StoppedStaleSession(duration),
        }
    }
}

/// The periodic supervisory process.
pub struct Monitor {
    config: TimerConfig,
    /// Re-entry guard for the midnight check, held until the clock moves
    /// past the boundary.
    midnight_fired: bool,
}

impl Monitor {
    pub fn new(config: TimerConfig) -> Self {
        Monitor { config, midnight_fired: false }
    }

    /// Evaluates one supervisory tick against the live session.
    ///
    /// Checks run in order: overlong session first, then the midnight
    /// boundary. The overlong comparison is strictly greater than the
    /// ceiling, matching the cap applied by [`Monitor::forced_end`].
    pub fn check(&mut self, session: &TimerSession, now: NaiveDateTime) -> Option<StopReason> {
        if session.live_elapsed(now) > self.config.max_session_secs {
            return Some(StopReason::MaxDuration);
        }

        let midnight = (now.date() + Duration::days(1)).and_hms_opt(0, 0, 0).unwrap();
        let remaining = (midnight - now).num_seconds();
        if remaining <= self.config.midnight_buffer_secs {
            if !self.midnight_fired {
                self.midnight_fired = true;
                return Some(StopReason::DayBoundary);
            }
        } else {
            self.midnight_fired = false;
        }

        None
    }

    /// Startup-only recovery check for a session restored from storage.
    ///
    /// Handles the process having been closed while a timer was running
    /// and reopened later; not evaluated on regular ticks.
    pub fn recover(config: &TimerConfig, session: &TimerSession, now: NaiveDateTime) -> Option<StopReason> {
        if session.start_time.date() != now.date() {
            Some(StopReason::StaleSession)
        } else if session.live_elapsed(now) > config.max_session_secs {
            Some(StopReason::MaxDuration)
        } else {
            None
        }
    }

    /// The end instant a forced stop should use.
    ///
    /// Overlong stops cap the end so the minted entry records exactly the
    /// ceiling; for a session paused past the ceiling the cap lands before
    /// the open pause, which [`TimerSession::finish_forced`] then drops.
    /// Stale day-crossed sessions end at 23:59:59 of their start day,
    /// still subject to the ceiling.
    pub fn forced_end(config: &TimerConfig, session: &TimerSession, reason: StopReason, now: NaiveDateTime) -> NaiveDateTime {
        let ceiling = session.start_time + Duration::seconds(session.total_paused_secs + config.max_session_secs);
        match reason {
            StopReason::MaxDuration => ceiling.min(now),
            StopReason::StaleSession if session.start_time.date() != now.date() => {
                let end_of_start_day = session.start_time.date().and_hms_opt(23, 59, 59).unwrap();
                end_of_start_day.min(ceiling).max(session.start_time)
            }
            _ => now,
        }
    }

    /// Applies the startup recovery check to the timer, forcing a stop
    /// when a stale or already-overlong session was restored.
    pub async fn recover_startup(timer: &mut Timer) -> Result<()> {
        let Some(session) = timer.session().cloned() else {
            return Ok(());
        };
        let now = Local::now().naive_local();
        if let Some(reason) = Self::recover(timer.config(), &session, now) {
            msg_warning!(Message::StaleSessionRecovered(session.start_time.format("%Y-%m-%d").to_string()));
            let end = Self::forced_end(timer.config(), &session, reason, now);
            if let Some(entry) = timer.stop_forced(end).await? {
                msg_warning!(reason.notice(entry.duration));
            }
        }
        Ok(())
    }

    /// Evaluates one full supervisory tick, returning whether the session
    /// is still active afterwards.
    ///
    /// The persisted session is re-read first: other CLI processes share
    /// the store, and a pause or stop issued elsewhere must be observed
    /// rather than overwritten by this process's stale in-memory copy.
    /// When work/break cycling is enabled the tick also advances the
    /// persisted phase clock and nudges the user once the phase target is
    /// reached.
    pub async fn tick(&mut self, timer: &mut Timer) -> Result<bool> {
        timer.reload()?;
        let Some(session) = timer.session().cloned() else {
            return Ok(false);
        };
        let now = Local::now().naive_local();

        if let Some(reason) = self.check(&session, now) {
            let end = Self::forced_end(&self.config, &session, reason, now);
            if let Some(entry) = timer.stop_forced(end).await? {
                msg_warning!(reason.notice(entry.duration));
            }
            return Ok(false);
        }

        if let Some(cycle) = &session.cycle {
            if !session.is_paused {
                let elapsed = cycle.elapsed_secs + self.config.poll_interval_secs as i64;
                timer.set_phase_elapsed(elapsed).await?;
                if elapsed >= cycle.target_secs() {
                    msg_info!(Message::PhaseSwitched(timer.switch_phase().await?.label().to_string()));
                }
            }
        }

        msg_debug!(Message::MonitorTick(format_seconds(session.live_elapsed(now))));
        Ok(true)
    }

    /// Runs the supervisory loop until the session returns to idle.
    pub async fn run(&mut self, timer: &mut Timer) -> Result<()> {
        msg_info!(Message::MonitorStarted {
            poll_interval: self.config.poll_interval_secs,
            max_session_hours: (self.config.max_session_secs / 3600) as u64,
        });

        while self.tick(timer).await? {
            time::sleep(time::Duration::from_secs(self.config.poll_interval_secs)).await;
        }

        msg_info!(Message::MonitorStopped);
        Ok(())
    }
}

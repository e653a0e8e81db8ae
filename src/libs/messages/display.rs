//! Display implementation for takt application messages.
//!
//! All user-facing text lives in this single `Display` implementation so the
//! wording of timer transitions, safety monitor notices, and prompts stays
//! consistent and greppable. Messages with dynamic content use typed
//! parameters interpolated here, never at the call site.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TIMER MESSAGES ===
            Message::TimerStarted(category) => format!("Timer started for '{}'", category),
            Message::TimerAlreadyRunning => "A session is already active; stop it before starting a new one".to_string(),
            Message::TimerNotRunning => "No session is currently running".to_string(),
            Message::TimerPaused(time) => format!("Timer paused at {}", time),
            Message::TimerAlreadyPaused => "The session is already paused".to_string(),
            Message::TimerNotPaused => "The session is not paused".to_string(),
            Message::TimerResumed(duration) => format!("Timer resumed after a {} pause", duration),
            Message::TimerStartEdited(start) => format!("Session start time moved to {}", start),
            Message::PhaseSwitched(phase) => format!("Switched to {} phase", phase),
            Message::CyclingNotEnabled => "Work/break cycling is not enabled for this session".to_string(),
            Message::StartTimeInFuture => "Start time cannot be in the future".to_string(),
            Message::StartTimeBeforePause => "Start time cannot be moved past the first recorded pause".to_string(),
            Message::SessionStatusTitle => "Current session".to_string(),
            Message::NoActiveSession => "No active session".to_string(),

            // === ENTRY MESSAGES ===
            Message::EntryRecorded { duration, category } => {
                format!("Recorded {} of active time on '{}'", duration, category)
            }
            Message::EntriesTitle(date) => format!("Entries for {}", date),
            Message::EntriesNotFoundForDate(date) => format!("No entries recorded for {}", date),

            // === GOAL MESSAGES ===
            Message::GoalCreated => "Goal created".to_string(),
            Message::GoalDeleted => "Goal deleted".to_string(),
            Message::GoalNotFound(id) => format!("Goal with id {} not found", id),
            Message::GoalsNotFound => "No goals configured".to_string(),
            Message::GoalsTitle => "Goal progress".to_string(),

            // === MONITOR MESSAGES ===
            Message::MonitorStarted { poll_interval, max_session_hours } => {
                format!(
                    "Safety monitor started (poll every {}s, session ceiling {}h)",
                    poll_interval, max_session_hours
                )
            }
            Message::MonitorStopped => "Safety monitor stopped".to_string(),
            Message::MonitorTick(elapsed) => format!("Session active for {}", elapsed),
            Message::StoppedMaxDuration(duration) => {
                format!("Stopped: exceeded maximum duration (recorded {})", duration)
            }
            Message::StoppedDayBoundary(duration) => format!("Stopped: day boundary (recorded {})", duration),
            Message::StoppedStaleSession(duration) => {
                format!("Stopped: resumed on a new day (recorded {})", duration)
            }
            Message::StaleSessionRecovered(date) => {
                format!("Found a session left running since {}; it has been closed", date)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleTimer => "Timer engine settings".to_string(),
            Message::ConfigModuleServer => "Remote record server settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptMaxSessionHours => "Maximum session length in hours".to_string(),
            Message::PromptMidnightBuffer => "Seconds before midnight to force a stop".to_string(),
            Message::PromptPollInterval => "Safety monitor poll interval in seconds".to_string(),
            Message::PromptWorkPhaseMinutes => "Work phase length in minutes".to_string(),
            Message::PromptBreakPhaseMinutes => "Break phase length in minutes".to_string(),
            Message::PromptServerApiUrl => "Record server API URL".to_string(),
            Message::PromptServerAuthToken => "Record server auth token".to_string(),

            // === STORAGE MESSAGES ===
            Message::RemoteSaveFailed(detail) => {
                format!("Remote session save failed, kept locally: {}", detail)
            }
            Message::RemoteEntryFailed(detail) => {
                format!("Remote entry save failed, kept locally: {}", detail)
            }

            // === GENERIC MESSAGES ===
            Message::InvalidDateFormat(input) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", input),
        };
        write!(f, "{}", text)
    }
}

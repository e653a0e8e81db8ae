#[derive(Debug, Clone)]
pub enum Message {
    // === TIMER MESSAGES ===
    TimerStarted(String),       // category label
    TimerAlreadyRunning,
    TimerNotRunning,
    TimerPaused(String),        // time
    TimerAlreadyPaused,
    TimerNotPaused,
    TimerResumed(String),       // pause duration
    TimerStartEdited(String),   // new start time
    PhaseSwitched(String),      // new phase label
    CyclingNotEnabled,
    StartTimeInFuture,
    StartTimeBeforePause,
    SessionStatusTitle,
    NoActiveSession,

    // === ENTRY MESSAGES ===
    EntryRecorded { duration: String, category: String },
    EntriesTitle(String), // date
    EntriesNotFoundForDate(String),

    // === GOAL MESSAGES ===
    GoalCreated,
    GoalDeleted,
    GoalNotFound(i64),
    GoalsNotFound,
    GoalsTitle,

    // === MONITOR MESSAGES ===
    MonitorStarted { poll_interval: u64, max_session_hours: u64 },
    MonitorStopped,
    MonitorTick(String),               // live elapsed
    StoppedMaxDuration(String),        // capped duration
    StoppedDayBoundary(String),        // entry duration
    StoppedStaleSession(String),       // entry duration
    StaleSessionRecovered(String),     // start date

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleTimer,
    ConfigModuleServer,
    PromptSelectModules,
    PromptMaxSessionHours,
    PromptMidnightBuffer,
    PromptPollInterval,
    PromptWorkPhaseMinutes,
    PromptBreakPhaseMinutes,
    PromptServerApiUrl,
    PromptServerAuthToken,

    // === STORAGE MESSAGES ===
    RemoteSaveFailed(String), // error detail
    RemoteEntryFailed(String),

    // === GENERIC MESSAGES ===
    InvalidDateFormat(String),
}

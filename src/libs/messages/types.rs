/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; code only
/// ever refers to variants.
#[derive(Debug, Clone)]
pub enum Message {
    // === IDENTITY MESSAGES ===
    SignedIn(String), // name
    SignedOut,
    NotSignedIn,
    PromptEmployeeId,
    PromptEmployeeName,
    PromptEmployeeRole,
    IdentityFieldRequired(String), // field label
    FiltersRequireManager,

    // === ATTENDANCE MESSAGES ===
    LoginAttendanceHeader,
    LogoutSummaryHeader,
    ConfirmLogin,
    ConfirmLogout,
    LoginConfirmed,
    LogoutCompleted,
    NoActiveSession,
    NothingToConfirm,
    SessionOverwritten(String), // previous login instant
    SessionCleared,
    AttendanceNotFound,
    TodaysAttendanceHeader,
    SnapshotWriteFailed(String),
    SnapshotUnavailable(String),

    // === TIMER MESSAGES ===
    TimerRunning(String), // formatted duration
    TimerStopped,
    TimerSessionEnded,
    TimerStartFailed(String),
    TimerInterval(u128), // milliseconds

    // === REMOTE LOG MESSAGES ===
    ApiNotConfigured,
    ApiAuthFailed,
    ApiRequestFailed(String), // status
    RecordCreated(String),    // name
    RecordSyncFailed(String),
    RecordsNotFound,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleApi,
    ConfigModuleTicker,
    PromptSelectModules,
    PromptApiUrl,
    PromptApiTimeout,
    PromptSyncOnLogout,
    PromptTickerInterval,

    // === GENERIC ===
    OperationCancelled,
    InvalidDate(String),
    InvalidClockTime(String),
}

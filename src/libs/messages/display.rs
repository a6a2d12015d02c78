//! Display implementation for clockin application messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent and every new message needs an explicit text decision.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === IDENTITY MESSAGES ===
            Message::SignedIn(name) => format!("Signed in as {}", name),
            Message::SignedOut => "Signed out. The attendance session on this device was discarded.".to_string(),
            Message::NotSignedIn => "Nobody is signed in. Run `clockin signin` first.".to_string(),
            Message::PromptEmployeeId => "Employee ID".to_string(),
            Message::PromptEmployeeName => "Employee name".to_string(),
            Message::PromptEmployeeRole => "Role (admin, manager or employee)".to_string(),
            Message::IdentityFieldRequired(field) => format!("{} must not be empty", field),
            Message::FiltersRequireManager => "Only admins and managers can search or filter attendance records".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::LoginAttendanceHeader => "Login Attendance".to_string(),
            Message::LogoutSummaryHeader => "Logout Summary".to_string(),
            Message::ConfirmLogin => "Are you sure you want to mark your login attendance?".to_string(),
            Message::ConfirmLogout => "Log out and close today's attendance?".to_string(),
            Message::LoginConfirmed => "Your attendance has been confirmed!".to_string(),
            Message::LogoutCompleted => "Logout completed successfully!".to_string(),
            Message::NoActiveSession => "There is no active attendance session to log out of.".to_string(),
            Message::NothingToConfirm => "Nothing is waiting for confirmation.".to_string(),
            Message::SessionOverwritten(login) => format!("Replacing the session that started at {}", login),
            Message::SessionCleared => "Attendance session cleared".to_string(),
            Message::AttendanceNotFound => "No attendance recorded yet.".to_string(),
            Message::TodaysAttendanceHeader => "Today's Attendance".to_string(),
            Message::SnapshotWriteFailed(e) => format!("Attendance was updated but could not be saved to disk: {}", e),
            Message::SnapshotUnavailable(e) => format!("Attendance storage unavailable, state will not survive a restart: {}", e),

            // === TIMER MESSAGES ===
            Message::TimerRunning(worked) => format!("Working: {}", worked),
            Message::TimerStopped => "Timer stopped".to_string(),
            Message::TimerSessionEnded => "The attendance session has ended".to_string(),
            Message::TimerStartFailed(e) => format!("Timer not started: {}", e),
            Message::TimerInterval(ms) => format!("Timer refreshes every {} ms", ms),

            // === REMOTE LOG MESSAGES ===
            Message::ApiNotConfigured => "Attendance API is not configured. Run `clockin init`.".to_string(),
            Message::ApiAuthFailed => "Attendance API rejected the request".to_string(),
            Message::ApiRequestFailed(status) => format!("Attendance API request failed with status {}", status),
            Message::RecordCreated(name) => format!("Attendance record for {} created", name),
            Message::RecordSyncFailed(e) => format!("Attendance was saved locally but not sent to the server: {}", e),
            Message::RecordsNotFound => "No attendance records found.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleApi => "Attendance API settings".to_string(),
            Message::ConfigModuleTicker => "Timer settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "API base URL".to_string(),
            Message::PromptApiTimeout => "Request timeout (seconds)".to_string(),
            Message::PromptSyncOnLogout => "Send a record to the server after logout".to_string(),
            Message::PromptTickerInterval => "Timer refresh interval (milliseconds)".to_string(),

            // === GENERIC ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidDate(date) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", date),
            Message::InvalidClockTime(time) => format!("Invalid time '{}', expected hh:mm:ss AM|PM", time),
        };

        write!(f, "{}", text)
    }
}

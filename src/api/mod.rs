//! Clients for external services.
//!
//! The only remote collaborator is the attendance log server. Its calls are
//! retried a few times at the call site; nothing in the local session core
//! depends on them succeeding.

use std::time::Duration;

pub mod attendance;

pub use attendance::{filter_records, AttendanceApi, AttendanceRecord, AttendanceStatus};

/// Maximum number of attempts for one remote call.
const MAX_RETRY_COUNT: u32 = 3;

/// Pause between attempts.
const RETRY_DELAY: Duration = Duration::from_secs(1);

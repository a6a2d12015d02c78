//! Compact duration formatting for attendance displays.
//!
//! Durations are rendered the way the timer column shows them: only the
//! units that carry information, largest first, separated by single spaces.
//!
//! ## Format Specifications
//!
//! - `Nh` appears when hours are non-zero
//! - `Nm` appears when minutes are non-zero, or whenever hours are shown
//! - `Ns` always appears
//!
//! ### Examples
//! - 5 seconds → "5s"
//! - 3 minutes 5 seconds → "3m 5s"
//! - 2 hours 5 seconds → "2h 0m 5s"
//!
//! ```rust
//! use clockin::libs::duration::WorkDuration;
//! use clockin::libs::formatter::format_duration;
//!
//! let d = WorkDuration { hours: 2, minutes: 0, seconds: 5 };
//! assert_eq!(format_duration(&d), "2h 0m 5s");
//! ```

use super::duration::WorkDuration;

/// Placeholder for a value that does not exist yet (no logout, no timer).
pub const EMPTY_CELL: &str = "-";

/// Formats a [`WorkDuration`] as `Nh Nm Ns`, dropping leading zero units.
pub fn format_duration(duration: &WorkDuration) -> String {
    let mut parts = Vec::with_capacity(3);

    if duration.hours > 0 {
        parts.push(format!("{}h", duration.hours));
    }
    if duration.minutes > 0 || duration.hours > 0 {
        parts.push(format!("{}m", duration.minutes));
    }
    parts.push(format!("{}s", duration.seconds));

    parts.join(" ")
}

/// Formats an optional duration, falling back to [`EMPTY_CELL`].
pub fn format_optional(duration: Option<&WorkDuration>) -> String {
    duration.map(format_duration).unwrap_or_else(|| EMPTY_CELL.to_string())
}

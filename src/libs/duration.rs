//! Elapsed-time arithmetic over 12-hour clock strings.
//!
//! Attendance instants carry no date, so both ends of an interval are placed
//! on one fixed reference day before subtracting. An end that reads earlier
//! than the start means the session ran past midnight; one full day is added
//! in that case, which keeps every result non-negative.
//!
//! ```rust
//! use clockin::libs::duration::{elapsed, WorkDuration};
//!
//! let worked = elapsed("09:00:00 AM", "05:30:15 PM").unwrap();
//! assert_eq!(worked, WorkDuration { hours: 8, minutes: 30, seconds: 15 });
//! assert_eq!(worked.to_string(), "8h 30m 15s");
//! ```

use super::error::ClockParseError;
use super::formatter::format_duration;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Accepted layouts, tried in order. Seconds are optional.
const CLOCK_LAYOUTS: [&str; 2] = ["%I:%M:%S %p", "%I:%M %p"];

/// Elapsed time split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl WorkDuration {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self))
    }
}

/// The day every parsed instant is pinned to.
fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

/// Parses `hh:mm:ss AM|PM` (or `hh:mm AM|PM`) onto the reference day.
///
/// 12 AM maps to hour 0 and 12 PM to hour 12. The marker is matched
/// case-insensitively and surrounding whitespace is ignored.
pub fn parse_clock(text: &str) -> Result<NaiveDateTime, ClockParseError> {
    let trimmed = text.trim();
    let time = CLOCK_LAYOUTS
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(trimmed, layout).ok())
        .ok_or_else(|| ClockParseError::new(text))?;

    // chrono accepts a leap second as :60, attendance instants never carry one
    if time.nanosecond() >= 1_000_000_000 {
        return Err(ClockParseError::new(text));
    }

    Ok(reference_day().and_time(time))
}

/// Time worked between two instants.
pub fn elapsed(start: &str, end: &str) -> Result<WorkDuration, ClockParseError> {
    let start = parse_clock(start)?;
    let end = parse_clock(end)?;

    let mut raw = (end - start).num_seconds();
    if raw < 0 {
        raw += SECONDS_PER_DAY;
    }

    Ok(WorkDuration::from_seconds(raw as u64))
}

/// Time worked between two dated instants.
///
/// When `end_date` is later than `start_date` the whole days in between are
/// counted, so a session left open past a full day keeps growing instead of
/// wrapping. On the same date this is [`elapsed`].
pub fn elapsed_across_days(
    start: &str,
    start_date: NaiveDate,
    end: &str,
    end_date: NaiveDate,
) -> Result<WorkDuration, ClockParseError> {
    let days = (end_date - start_date).num_days();
    if days <= 0 {
        return elapsed(start, end);
    }

    let raw = (parse_clock(end)? - parse_clock(start)?).num_seconds() + days * SECONDS_PER_DAY;
    Ok(WorkDuration::from_seconds(raw.max(0) as u64))
}

/// [`elapsed`] for display paths: a malformed instant is logged and counts as zero.
pub fn elapsed_or_zero(start: &str, end: &str) -> WorkDuration {
    match elapsed(start, end) {
        Ok(duration) => duration,
        Err(e) => {
            tracing::warn!(input = %e.input, "{}", e);
            WorkDuration::zero()
        }
    }
}

//! Wall-clock source for attendance instants.
//!
//! Instants are kept the way the user sees them: a 12-hour clock string with
//! seconds precision and an AM/PM marker (`09:05:07 AM`). The [`Clock`] trait
//! lets the session machinery run against a fake clock in tests.

use chrono::{Local, NaiveDate, NaiveDateTime};
use parking_lot::Mutex;

/// Display format of every attendance instant.
pub const CLOCK_FORMAT: &str = "%I:%M:%S %p";

/// Date format used for session dates and remote records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Clock: Send + Sync {
    /// Current wall-clock time formatted with [`CLOCK_FORMAT`].
    fn now_clock(&self) -> String;

    /// Current calendar day.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_clock(&self) -> String {
        Local::now().format(CLOCK_FORMAT).to_string()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now_clock(&self) -> String {
        self.now.lock().format(CLOCK_FORMAT).to_string()
    }

    fn today(&self) -> NaiveDate {
        self.now.lock().date()
    }
}

//! Implements ClockPort. System local date, or a fixed date for tests and reproducible runs.

use crate::ports::ClockPort;
use chrono::{Local, NaiveDate};

/// Local calendar date of the host.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

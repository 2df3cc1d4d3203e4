//! Calendar day source
//!
//! Daily sets are keyed by an ISO day string ("YYYY-MM-DD") so that
//! comparisons never depend on locale formatting.

use chrono::{Local, NaiveDate};

/// Provides "today" to the engine
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Today as a "YYYY-MM-DD" day identifier
    fn today_string(&self) -> String {
        day_string(self.today())
    }
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date (tests, replays)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Format a date as a day identifier
pub fn day_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

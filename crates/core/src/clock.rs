// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable date handling

use chrono::{Days, Local, NaiveDate};
use parking_lot::Mutex;
use std::sync::Arc;

/// A clock that provides today's date in local time
pub trait Clock: Clone + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Real system clock
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fake clock for testing with controllable date
#[derive(Clone, Debug)]
pub struct FakeClock {
    today: Arc<Mutex<NaiveDate>>,
}

impl FakeClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today: Arc::new(Mutex::new(today)) }
    }

    /// Fake clock starting on the given calendar date (1970-01-01 if invalid)
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
    }

    /// Advance the clock by whole days
    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.lock();
        *today = today.checked_add_days(Days::new(days)).unwrap_or(*today);
    }

    /// Set the clock to a specific date
    pub fn set(&self, date: NaiveDate) {
        *self.today.lock() = date;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::ymd(2024, 3, 1)
    }
}

impl Clock for FakeClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;

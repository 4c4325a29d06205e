// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable date handling

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use std::sync::{Arc, Mutex};

/// A clock that provides the current local date and time
pub trait Clock: Clone + Send + Sync {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date (time of day dropped)
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Milliseconds since the Unix epoch
    fn epoch_millis(&self) -> i64 {
        self.now().and_utc().timestamp_millis()
    }
}

/// Real system clock in local time
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn epoch_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl FakeClock {
    /// Create a clock frozen at midnight of the given date
    pub fn at(date: NaiveDate) -> Self {
        Self {
            current: Arc::new(Mutex::new(date.and_time(Default::default()))),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Set the clock to a specific moment
    pub fn set(&self, moment: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = moment;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::at(NaiveDate::default())
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ID generation abstractions

use crate::clock::{Clock, SystemClock};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

/// Generates unique identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> String;
}

/// Time-derived ID generator for production use.
///
/// IDs are the current epoch milliseconds. Two IDs issued within the same
/// millisecond by one generator are bumped so the sequence stays strictly
/// increasing; uniqueness across processes is not guaranteed.
#[derive(Clone)]
pub struct TimestampIdGen<C: Clock = SystemClock> {
    clock: C,
    last: Arc<AtomicI64>,
}

impl<C: Clock> TimestampIdGen<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last: Arc::new(AtomicI64::new(i64::MIN)),
        }
    }
}

impl Default for TimestampIdGen<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> IdGen for TimestampIdGen<C> {
    fn next(&self) -> String {
        let now = self.clock.epoch_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now.max(previous.saturating_add(1)).to_string()
    }
}

/// Sequential ID generator for testing
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;

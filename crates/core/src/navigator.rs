// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cursor over the generated work-day list

use crate::rotation::WorkDayEntry;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;

/// Result of a cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The cursor changed position
    Moved { from: usize, to: usize },
    /// The cursor was already at the first/last entry
    AtBoundary,
    /// No entry matched the week-jump target; cursor unchanged
    NotFound,
}

/// Immutable day list plus a clamped cursor
#[derive(Debug, Clone)]
pub struct DayNavigator {
    days: Arc<[WorkDayEntry]>,
    index: usize,
}

impl DayNavigator {
    /// Create a navigator positioned at the default index for `today`
    pub fn new(days: impl Into<Arc<[WorkDayEntry]>>, today: NaiveDate) -> Self {
        let days = days.into();
        let index = default_index(&days, today);
        Self { days, index }
    }

    pub fn current(&self) -> Option<&WorkDayEntry> {
        self.days.get(self.index)
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn days(&self) -> &[WorkDayEntry] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.days.len()
    }

    pub fn previous_day(&mut self) -> NavOutcome {
        if !self.can_go_previous() {
            return NavOutcome::AtBoundary;
        }
        self.move_to(self.index - 1)
    }

    pub fn next_day(&mut self) -> NavOutcome {
        if !self.can_go_next() {
            return NavOutcome::AtBoundary;
        }
        self.move_to(self.index + 1)
    }

    pub fn jump_to_today(&mut self, today: NaiveDate) -> NavOutcome {
        let target = default_index(&self.days, today);
        self.move_to(target)
    }

    /// Jump to the first entry on or after one week from the current date
    pub fn next_week(&mut self) -> NavOutcome {
        let Some(current) = self.current() else {
            return NavOutcome::NotFound;
        };
        let target = current.date + Duration::weeks(1);
        let found = self.days.iter().position(|d| d.date >= target);
        match found {
            Some(found) => self.move_to(found),
            None => NavOutcome::NotFound,
        }
    }

    /// Jump to the last entry on or before one week before the current date
    pub fn previous_week(&mut self) -> NavOutcome {
        let Some(current) = self.current() else {
            return NavOutcome::NotFound;
        };
        let target = current.date - Duration::weeks(1);
        let found = self.days.iter().rposition(|d| d.date <= target);
        match found {
            Some(found) => self.move_to(found),
            None => NavOutcome::NotFound,
        }
    }

    /// Select the entry for `date` if one exists
    pub fn select_date(&mut self, date: NaiveDate) -> NavOutcome {
        let found = self.days.iter().position(|d| d.date == date);
        match found {
            Some(found) => self.move_to(found),
            None => NavOutcome::NotFound,
        }
    }

    fn move_to(&mut self, to: usize) -> NavOutcome {
        let from = self.index;
        self.index = to.min(self.days.len().saturating_sub(1));
        tracing::debug!(from, to = self.index, "cursor moved");
        NavOutcome::Moved {
            from,
            to: self.index,
        }
    }
}

/// Index of the earliest entry on or after `today`, or 0 when none qualifies
pub fn default_index(days: &[WorkDayEntry], today: NaiveDate) -> usize {
    days.iter().position(|d| d.date >= today).unwrap_or(0)
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name and date formatting for the schedule view

use crate::roster::Worker;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How worker names are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Full,
    First,
    Last,
    Initials,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Full,
        DisplayMode::First,
        DisplayMode::Last,
        DisplayMode::Initials,
    ];

    /// Next mode in the toggle order, wrapping back to `Full`
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Full => DisplayMode::First,
            DisplayMode::First => DisplayMode::Last,
            DisplayMode::Last => DisplayMode::Initials,
            DisplayMode::Initials => DisplayMode::Full,
        }
    }

    /// Button label for the mode
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Full => "Full Names",
            DisplayMode::First => "First Names",
            DisplayMode::Last => "Last Names",
            DisplayMode::Initials => "Initials",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Full => "full",
            DisplayMode::First => "first",
            DisplayMode::Last => "last",
            DisplayMode::Initials => "initials",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown display mode: {}", s))
    }
}

/// Render a worker's name in the given mode
pub fn format_name(worker: &Worker, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Full => worker.name.clone(),
        DisplayMode::First => worker.first_name().to_string(),
        DisplayMode::Last => worker.last_name().to_string(),
        DisplayMode::Initials => worker
            .first_name()
            .chars()
            .take(1)
            .chain(worker.last_name().chars().take(1))
            .collect(),
    }
}

/// "Sunday, May 4, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Reminder shown under a day's teams
pub fn pairing_note(date: NaiveDate) -> Option<&'static str> {
    match date.weekday() {
        Weekday::Sun => Some("Same team works on Monday"),
        Weekday::Mon => Some("Same team worked on Sunday"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Special events: ad-hoc exceptions to the rotation

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of exception being recorded.
///
/// Serialized by its display string so stored records read the same as the
/// labels shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "Absent (Sunday)")]
    AbsentSunday,
    #[serde(rename = "Sunday Swap")]
    SundaySwap,
    #[serde(rename = "Sunday Extra Duty")]
    SundayExtraDuty,
    #[serde(rename = "Absent (Monday)")]
    AbsentMonday,
    #[serde(rename = "Monday Swap")]
    MondaySwap,
    #[serde(rename = "Monday Extra Duty")]
    MondayExtraDuty,
    #[serde(rename = "Others")]
    Others,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::AbsentSunday,
        EventKind::SundaySwap,
        EventKind::SundayExtraDuty,
        EventKind::AbsentMonday,
        EventKind::MondaySwap,
        EventKind::MondayExtraDuty,
        EventKind::Others,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::AbsentSunday => "Absent (Sunday)",
            EventKind::SundaySwap => "Sunday Swap",
            EventKind::SundayExtraDuty => "Sunday Extra Duty",
            EventKind::AbsentMonday => "Absent (Monday)",
            EventKind::MondaySwap => "Monday Swap",
            EventKind::MondayExtraDuty => "Monday Extra Duty",
            EventKind::Others => "Others",
        }
    }

    /// The weekday this kind is tied to; `None` for [`EventKind::Others`]
    pub fn weekday(self) -> Option<Weekday> {
        match self {
            EventKind::AbsentSunday | EventKind::SundaySwap | EventKind::SundayExtraDuty => {
                Some(Weekday::Sun)
            }
            EventKind::AbsentMonday | EventKind::MondaySwap | EventKind::MondayExtraDuty => {
                Some(Weekday::Mon)
            }
            EventKind::Others => None,
        }
    }

    pub fn allowed_on(self, date: NaiveDate) -> bool {
        match self.weekday() {
            Some(day) => date.weekday() == day,
            None => true,
        }
    }

    /// Kinds selectable for a date, in menu order
    pub fn for_date(date: NaiveDate) -> Vec<EventKind> {
        EventKind::ALL
            .into_iter()
            .filter(|k| k.allowed_on(date))
            .collect()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EventKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown event kind: {}", s))
    }
}

/// A recorded exception
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialEvent {
    pub id: String,
    pub worker_id: String,
    pub date: NaiveDate,
    pub event: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SpecialEvent {
    /// True when the kind matches the event's weekday
    pub fn is_consistent(&self) -> bool {
        self.event.allowed_on(self.date)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

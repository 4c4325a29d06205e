// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rotation engine
//!
//! Maps calendar dates onto a repeating cycle of team assignments. Every
//! week (Sunday + Monday) gets one step of the cycle; the step for any week
//! is derived from a fixed anchor so the result does not depend on when the
//! list is built.
//!
//! ```text
//!   anchor: 2025-05-04 (Sun) -> step 0
//!
//!   Su Mo | step
//!    4  5 |  0
//!   11 12 |  1
//!   18 19 |  2
//!   ...   |  ...
//!   15 16 |  6   (June)
//!   22 23 |  0   <- wraps
//! ```

use crate::roster::{Roster, Worker};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error("rotation cycle has no steps")]
    Empty,
    #[error("step {step}: worker '{id}' is assigned more than once")]
    DuplicateAssignment { step: usize, id: String },
    #[error("step {step}: worker '{id}' is not on the roster")]
    UnknownWorker { step: usize, id: String },
    #[error("step {step}: worker '{id}' has no assignment")]
    MissingWorker { step: usize, id: String },
}

/// One row of the cycle, expressed as worker ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationStep {
    pub frontline: Vec<String>,
    pub backline: Vec<String>,
    pub off: Vec<String>,
}

impl RotationStep {
    pub fn new(frontline: &[&str], backline: &[&str], off: &[&str]) -> Self {
        let owned = |ids: &[&str]| -> Vec<String> { ids.iter().map(|s| s.to_string()).collect() };
        Self {
            frontline: owned(frontline),
            backline: owned(backline),
            off: owned(off),
        }
    }

    fn ids(&self) -> impl Iterator<Item = &String> {
        self.frontline
            .iter()
            .chain(self.backline.iter())
            .chain(self.off.iter())
    }

    /// Resolve ids to workers. Ids missing from the roster are dropped.
    pub fn resolve(&self, roster: &Roster) -> ResolvedRotation {
        let bucket = |ids: &[String]| -> Vec<Worker> {
            ids.iter()
                .filter_map(|id| {
                    let worker = roster.get(id).cloned();
                    if worker.is_none() {
                        tracing::warn!(id = %id, "rotation references unknown worker");
                    }
                    worker
                })
                .collect()
        };
        ResolvedRotation {
            frontline: bucket(&self.frontline),
            backline: bucket(&self.backline),
            off: bucket(&self.off),
        }
    }
}

/// A step with its ids resolved to workers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRotation {
    pub frontline: Vec<Worker>,
    pub backline: Vec<Worker>,
    pub off: Vec<Worker>,
}

/// Closed cycle of rotation steps; step `len` wraps to step 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RotationCycle {
    steps: Vec<RotationStep>,
}

impl RotationCycle {
    pub fn new(steps: Vec<RotationStep>) -> Result<Self, CycleError> {
        if steps.is_empty() {
            return Err(CycleError::Empty);
        }
        for (index, step) in steps.iter().enumerate() {
            let ids: Vec<&String> = step.ids().collect();
            for (i, id) in ids.iter().enumerate() {
                if ids[..i].contains(id) {
                    return Err(CycleError::DuplicateAssignment {
                        step: index,
                        id: id.to_string(),
                    });
                }
            }
        }
        Ok(Self { steps })
    }

    /// The default seven-step cycle: frontline pairs advance by two each week
    pub fn default_cycle() -> Self {
        Self {
            steps: vec![
                RotationStep::new(&["A", "B"], &["C", "D", "E"], &["F", "G"]),
                RotationStep::new(&["C", "D"], &["E", "F", "G"], &["A", "B"]),
                RotationStep::new(&["E", "F"], &["G", "A", "B"], &["C", "D"]),
                RotationStep::new(&["G", "A"], &["B", "C", "D"], &["E", "F"]),
                RotationStep::new(&["B", "C"], &["D", "E", "F"], &["G", "A"]),
                RotationStep::new(&["D", "E"], &["F", "G", "A"], &["B", "C"]),
                RotationStep::new(&["F", "G"], &["A", "B", "C"], &["D", "E"]),
            ],
        }
    }

    /// Check that every step assigns each roster worker exactly once
    pub fn validate_against(&self, roster: &Roster) -> Result<(), CycleError> {
        for (index, step) in self.steps.iter().enumerate() {
            if let Some(id) = step.ids().find(|id| !roster.contains(id)) {
                return Err(CycleError::UnknownWorker {
                    step: index,
                    id: id.clone(),
                });
            }
            if let Some(id) = roster.ids().find(|id| !step.ids().any(|s| s == id)) {
                return Err(CycleError::MissingWorker {
                    step: index,
                    id: id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Step at `index`, wrapping around the cycle
    pub fn step(&self, index: usize) -> &RotationStep {
        &self.steps[index % self.steps.len()]
    }

    pub fn steps(&self) -> &[RotationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Fixed reference point: the week containing `date` runs step `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub date: NaiveDate,
    pub index: i64,
}

/// A generated work day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDayEntry {
    pub date: NaiveDate,
    pub step_index: usize,
    pub rotation: ResolvedRotation,
    pub is_work_day: bool,
}

impl WorkDayEntry {
    pub fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }

    pub fn is_monday(&self) -> bool {
        self.date.weekday() == Weekday::Mon
    }
}

/// True for the two rota days
pub fn is_work_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sun | Weekday::Mon)
}

/// The Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Cycle position of the week containing `date`, computed directly from the anchor
pub fn step_index_for(anchor: &Anchor, date: NaiveDate, cycle_len: usize) -> usize {
    let len = cycle_len.max(1) as i64;
    let weeks_offset = (week_start(date) - week_start(anchor.date)).num_weeks();
    // Reduce each term first so any configured index stays in range
    let value = anchor.index.rem_euclid(len) + weeks_offset.rem_euclid(len);
    value.rem_euclid(len) as usize
}

/// Build the ordered Sunday/Monday list for every week whose Sunday falls
/// between the week of `start` and `end` inclusive.
///
/// A Monday is emitted with its Sunday even when that Monday is past `end`.
pub fn generate_work_days(
    anchor: &Anchor,
    start: NaiveDate,
    end: NaiveDate,
    cycle: &RotationCycle,
    roster: &Roster,
) -> Vec<WorkDayEntry> {
    let mut cursor = week_start(start);
    let mut index = step_index_for(anchor, cursor, cycle.len());
    let mut days = Vec::new();

    while cursor <= end {
        let rotation = cycle.step(index).resolve(roster);
        let monday = cursor + Duration::days(1);

        days.push(WorkDayEntry {
            date: cursor,
            step_index: index,
            rotation: rotation.clone(),
            is_work_day: true,
        });
        days.push(WorkDayEntry {
            date: monday,
            step_index: index,
            rotation,
            is_work_day: true,
        });

        index = (index + 1) % cycle.len();
        cursor += Duration::weeks(1);
    }

    days.sort_by_key(|d| d.date);
    tracing::debug!(
        count = days.len(),
        start = %start,
        end = %end,
        "generated work days"
    );
    days
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;

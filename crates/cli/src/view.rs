// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Printable views of the schedule
//!
//! Each view is plain data with a text rendering (`Display`) and a JSON
//! rendering (`Serialize`), so commands can hand them to `output::print`.

use chrono::NaiveDate;
use rota_core::{
    format_long_date, format_name, pairing_note, DisplayMode, EventKind, Roster, SpecialEvent,
    WorkDayEntry, Worker,
};
use serde::Serialize;
use std::fmt;

const RULES: [&str; 2] = [
    "Work days are Sundays and Mondays only",
    "The same team works on both Sunday and Monday each week",
];

/// A worker with their name rendered for the active display mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedWorker {
    pub id: String,
    pub name: String,
}

impl NamedWorker {
    fn new(worker: &Worker, mode: DisplayMode) -> Self {
        Self {
            id: worker.id.clone(),
            name: format_name(worker, mode),
        }
    }

    fn all(workers: &[Worker], mode: DisplayMode) -> Vec<Self> {
        workers.iter().map(|w| Self::new(w, mode)).collect()
    }
}

/// The selected day with its three teams
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView {
    pub date: NaiveDate,
    pub title: String,
    pub step_index: usize,
    pub display_mode: DisplayMode,
    pub frontline: Vec<NamedWorker>,
    pub backline: Vec<NamedWorker>,
    pub off: Vec<NamedWorker>,
    pub note: Option<&'static str>,
    pub events: Vec<EventLine>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl ScheduleView {
    pub fn new(
        day: &WorkDayEntry,
        mode: DisplayMode,
        events: Vec<EventLine>,
        can_go_previous: bool,
        can_go_next: bool,
    ) -> Self {
        Self {
            date: day.date,
            title: format_long_date(day.date),
            step_index: day.step_index,
            display_mode: mode,
            frontline: NamedWorker::all(&day.rotation.frontline, mode),
            backline: NamedWorker::all(&day.rotation.backline, mode),
            off: NamedWorker::all(&day.rotation.off, mode),
            note: pairing_note(day.date),
            events,
            can_go_previous,
            can_go_next,
        }
    }
}

fn write_team(f: &mut fmt::Formatter<'_>, heading: &str, team: &[NamedWorker]) -> fmt::Result {
    writeln!(f, "{}", heading)?;
    for worker in team {
        writeln!(f, "  {}  {}", worker.id, worker.name)?;
    }
    Ok(())
}

impl fmt::Display for ScheduleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        write_team(f, "Frontline", &self.frontline)?;
        writeln!(f)?;
        write_team(f, "Backline", &self.backline)?;
        writeln!(f)?;
        write_team(f, "Off", &self.off)?;
        if let Some(note) = self.note {
            writeln!(f)?;
            writeln!(f, "{}", note)?;
        }
        if !self.events.is_empty() {
            writeln!(f)?;
            writeln!(f, "Special events")?;
            for event in &self.events {
                writeln!(f, "  {}", event)?;
            }
        }
        write!(f, "\nDisplay: {}", self.display_mode.label())
    }
}

/// One row of `rota days`
#[derive(Debug, Clone, Serialize)]
pub struct DayLine {
    pub date: NaiveDate,
    pub step_index: usize,
    pub frontline: Vec<NamedWorker>,
    pub backline: Vec<NamedWorker>,
    pub off: Vec<NamedWorker>,
}

impl DayLine {
    pub fn new(day: &WorkDayEntry, mode: DisplayMode) -> Self {
        Self {
            date: day.date,
            step_index: day.step_index,
            frontline: NamedWorker::all(&day.rotation.frontline, mode),
            backline: NamedWorker::all(&day.rotation.backline, mode),
            off: NamedWorker::all(&day.rotation.off, mode),
        }
    }
}

fn join_names(team: &[NamedWorker]) -> String {
    team.iter()
        .map(|w| w.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for DayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}  step {}  {} | {} | {}",
            self.date,
            self.date.format("%a"),
            self.step_index,
            join_names(&self.frontline),
            join_names(&self.backline),
            join_names(&self.off),
        )
    }
}

/// A special event with the worker's name attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLine {
    pub id: String,
    pub worker_id: String,
    pub worker_name: Option<String>,
    pub date: NaiveDate,
    pub event: EventKind,
    pub note: Option<String>,
}

impl EventLine {
    pub fn new(event: &SpecialEvent, roster: &Roster) -> Self {
        Self {
            id: event.id.clone(),
            worker_id: event.worker_id.clone(),
            worker_name: roster.get(&event.worker_id).map(|w| w.name.clone()),
            date: event.date,
            event: event.event,
            note: event.note.clone(),
        }
    }
}

impl fmt::Display for EventLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} {}  {} {}  {}",
            self.id,
            self.date,
            self.date.format("%a"),
            self.worker_id,
            self.worker_name.as_deref().unwrap_or("(unknown)"),
            self.event,
        )?;
        if let Some(note) = &self.note {
            write!(f, "  ({})", note)?;
        }
        Ok(())
    }
}

/// Roster legend and the rota rules
#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub workers: Vec<Worker>,
    pub rules: Vec<String>,
}

impl Legend {
    pub fn new(roster: &Roster, cycle_len: usize) -> Self {
        let mut rules: Vec<String> = RULES.iter().map(|r| r.to_string()).collect();
        rules.push(format!(
            "Teams rotate weekly following a {}-week cycle",
            cycle_len
        ));
        Self {
            workers: roster.workers().to_vec(),
            rules,
        }
    }
}

impl fmt::Display for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Worker Legend")?;
        for worker in &self.workers {
            writeln!(f, "  {}  {}", worker.id, worker.name)?;
        }
        writeln!(f)?;
        let rules = self.rules.join("\n");
        write!(f, "{}", rules)
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;

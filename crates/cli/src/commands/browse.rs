// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rota browse` - interactive schedule session
//!
//! Line-oriented: each command is one line of input. The session survives
//! every error; only `q` or end of input ends it.

use super::{Session, Settings};
use crate::app::{App, AppError, View};
use crate::error::RotaError;
use chrono::NaiveDate;
use rota_core::{Clock, EventKind, IdGen, NavOutcome};
use rota_storage::KeyValueStore;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  n  next day        p  previous day
  N  next week       P  previous week
  t  today           g  go to date
  d  display mode    v  schedule / events
  a  add event       r  remove event
  l  logout          q  quit";

pub fn handle(settings: &Settings) -> anyhow::Result<()> {
    let mut session = Session::open(settings)?;
    let secret_configured = session.secret_configured;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Browser::new(&mut session.app, secret_configured, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

pub struct Browser<'a, S, I, C, R, W>
where
    S: KeyValueStore,
    I: IdGen,
    C: Clock,
{
    app: &'a mut App<S, I, C>,
    secret_configured: bool,
    input: R,
    out: W,
}

impl<'a, S, I, C, R, W> Browser<'a, S, I, C, R, W>
where
    S: KeyValueStore,
    I: IdGen,
    C: Clock,
    R: BufRead,
    W: Write,
{
    pub fn new(app: &'a mut App<S, I, C>, secret_configured: bool, input: R, out: W) -> Self {
        Self {
            app,
            secret_configured,
            input,
            out,
        }
    }

    /// Run until `q` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if !self.app.is_authenticated() {
                writeln!(self.out, "Password Required")?;
                let Some(password) = self.prompt("Password: ")? else {
                    return Ok(());
                };
                if let Err(e) = self.app.login(&password) {
                    self.report(e)?;
                }
                continue;
            }

            self.render()?;
            let Some(line) = self.prompt("> ")? else {
                return Ok(());
            };
            if !self.dispatch(line.trim())? {
                return Ok(());
            }
        }
    }

    /// Handle one command; false means quit
    fn dispatch(&mut self, command: &str) -> io::Result<bool> {
        let result = match command {
            "q" => return Ok(false),
            "n" => self.app.next_day().map(|o| nav_message(o, "last work day", "")),
            "p" => self
                .app
                .previous_day()
                .map(|o| nav_message(o, "first work day", "")),
            "N" => self
                .app
                .next_week()
                .map(|o| nav_message(o, "", "No work day a week later")),
            "P" => self
                .app
                .previous_week()
                .map(|o| nav_message(o, "", "No work day a week earlier")),
            "t" => self.app.jump_to_today().map(|_| None),
            "d" => self
                .app
                .toggle_display_mode()
                .map(|m| Some(format!("Display: {}", m.label()))),
            "v" => self.app.toggle_view().map(|_| None),
            "l" => self.app.logout().map(|_| Some("Logged out".to_string())),
            "g" => return self.go_to().map(|_| true),
            "a" => return self.add_event().map(|_| true),
            "r" => return self.remove_event().map(|_| true),
            "" | "?" | "h" => Ok(Some(HELP.to_string())),
            other => Ok(Some(format!("Unknown command '{}'\n{}", other, HELP))),
        };

        match result {
            Ok(Some(message)) => writeln!(self.out, "{}", message)?,
            Ok(None) => {}
            Err(e) => self.report(e)?,
        }
        Ok(true)
    }

    fn render(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Worker Rotation Schedule")?;
        writeln!(self.out)?;
        match self.app.view() {
            View::Schedule => self.render_schedule(),
            View::Events => self.render_events(),
        }
    }

    fn render_schedule(&mut self) -> io::Result<()> {
        let view = match self.app.schedule() {
            Ok(Some(view)) => view,
            Ok(None) => return writeln!(self.out, "{}", RotaError::no_work_days()),
            Err(e) => return self.report(e),
        };
        let (position, total) = self.app.progress();
        writeln!(self.out, "{}", view)?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Day {} of {}   [P] prev week  [{}] prev day  [t] today  [{}] next day  [N] next week",
            position + 1,
            total,
            if view.can_go_previous { "p" } else { "-" },
            if view.can_go_next { "n" } else { "-" },
        )
    }

    fn render_events(&mut self) -> io::Result<()> {
        let events = match self.app.events() {
            Ok(events) => events,
            Err(e) => return self.report(e),
        };
        writeln!(self.out, "Special Events")?;
        if events.is_empty() {
            writeln!(self.out, "  No special events")?;
        }
        for event in &events {
            writeln!(self.out, "  {}", event)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "[a] add  [r] remove  [v] back to schedule")
    }

    fn go_to(&mut self) -> io::Result<()> {
        let Some(date) = self.prompt_date("Date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let exact = match self.app.select_date(date) {
            Ok(outcome) => outcome,
            Err(e) => return self.report(e),
        };
        if exact == NavOutcome::NotFound {
            writeln!(self.out, "{} is not a work day, showing the next one", date)?;
            if let Err(e) = self.app.jump_to(date) {
                self.report(e)?;
            }
        }
        Ok(())
    }

    fn add_event(&mut self) -> io::Result<()> {
        let Some(worker) = self.prompt("Worker id: ")? else {
            return Ok(());
        };
        let worker = worker.trim().to_ascii_uppercase();

        let current = match self.app.current_day().map(|day| day.map(|d| d.date)) {
            Ok(date) => date,
            Err(e) => return self.report(e),
        };
        let label = match current {
            Some(d) => format!("Date (YYYY-MM-DD) [{}]: ", d),
            None => "Date (YYYY-MM-DD): ".to_string(),
        };
        let Some(raw) = self.prompt(&label)? else {
            return Ok(());
        };
        let date = match (raw.trim(), current) {
            ("", Some(d)) => d,
            (text, _) => match text.parse::<NaiveDate>() {
                Ok(d) => d,
                Err(_) => return writeln!(self.out, "Invalid date '{}'", text),
            },
        };

        let kinds = EventKind::for_date(date);
        for (i, kind) in kinds.iter().enumerate() {
            writeln!(self.out, "  {}. {}", i + 1, kind)?;
        }
        let Some(choice) = self.prompt(&format!("Event [1-{}]: ", kinds.len()))? else {
            return Ok(());
        };
        let Some(kind) = pick_kind(&kinds, choice.trim()) else {
            return writeln!(self.out, "Invalid choice '{}'", choice.trim());
        };

        let Some(note) = self.prompt("Note (optional): ")? else {
            return Ok(());
        };
        match self.app.register_event(&worker, date, kind, Some(note)) {
            Ok(event) => writeln!(self.out, "Added event {}", event.id),
            Err(e) => self.report(e),
        }
    }

    fn remove_event(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Event id: ")? else {
            return Ok(());
        };
        let id = id.trim();
        match self.app.delete_event(id) {
            Ok(true) => writeln!(self.out, "Removed {}", id),
            Ok(false) => write!(self.out, "{}", RotaError::event_not_found(id)),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: AppError) -> io::Result<()> {
        tracing::debug!(error = %err, "browse command failed");
        write!(
            self.out,
            "{}",
            RotaError::from_app(err, self.secret_configured)
        )
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_date(&mut self, label: &str) -> io::Result<Option<NaiveDate>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.trim().parse::<NaiveDate>() {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                writeln!(self.out, "Invalid date '{}'", raw.trim())?;
                Ok(None)
            }
        }
    }
}

/// Accept a menu number or the kind's name
fn pick_kind(kinds: &[EventKind], choice: &str) -> Option<EventKind> {
    if let Ok(n) = choice.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| kinds.get(i)).copied();
    }
    choice.parse::<EventKind>().ok()
}

fn nav_message(outcome: NavOutcome, boundary: &str, not_found: &str) -> Option<String> {
    match outcome {
        NavOutcome::Moved { .. } => None,
        NavOutcome::AtBoundary => Some(format!("Already at the {}", boundary)),
        NavOutcome::NotFound => Some(not_found.to_string()),
    }
}

#[cfg(test)]
#[path = "browse_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application state
//!
//! One struct owns everything a session can change. Every transition except
//! [`App::login`] checks the session flag first.

use crate::view::{DayLine, EventLine, Legend, ScheduleView};
use chrono::NaiveDate;
use rota_core::{
    generate_work_days, Clock, DisplayMode, DayNavigator, EventKind, IdGen, NavOutcome, Roster,
    ScheduleConfig, SpecialEvent, WorkDayEntry,
};
use rota_storage::{
    AuthError, EventRegister, KeyValueStore, MemoryStore, RegisterError, SessionGate,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not logged in")]
    NotAuthenticated,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Register(#[from] RegisterError),
    #[error("{0} is not a Sunday or Monday")]
    NotAWorkDay(NaiveDate),
    #[error("'{kind}' cannot be recorded on {date}")]
    KindNotAllowed { kind: EventKind, date: NaiveDate },
    #[error("unknown worker '{0}'")]
    UnknownWorker(String),
}

/// Which panel is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Schedule,
    Events,
}

impl View {
    pub fn toggle(self) -> Self {
        match self {
            View::Schedule => View::Events,
            View::Events => View::Schedule,
        }
    }
}

pub struct App<S: KeyValueStore, I: IdGen, C: Clock> {
    roster: Roster,
    cycle_len: usize,
    gate: SessionGate<MemoryStore>,
    navigator: DayNavigator,
    display_mode: DisplayMode,
    view: View,
    register: EventRegister<S, I>,
    clock: C,
}

impl<S: KeyValueStore, I: IdGen, C: Clock> App<S, I, C> {
    /// Build the day list and load the register. The session starts logged out.
    pub fn new(config: ScheduleConfig, store: S, ids: I, clock: C) -> Result<Self, AppError> {
        let days = generate_work_days(
            &config.anchor,
            config.start_date,
            config.end_date,
            &config.cycle,
            &config.roster,
        );
        let navigator = DayNavigator::new(days, clock.today());
        let register = EventRegister::load(store, ids)?;
        let gate = SessionGate::new(MemoryStore::new(), config.secret);

        Ok(Self {
            roster: config.roster,
            cycle_len: config.cycle.len(),
            gate,
            navigator,
            display_mode: DisplayMode::default(),
            view: View::default(),
            register,
            clock,
        })
    }

    pub fn login(&mut self, password: &str) -> Result<(), AppError> {
        self.gate.authenticate(password)?;
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        self.require_auth()?;
        self.gate.logout()?;
        self.view = View::default();
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    fn require_auth(&self) -> Result<(), AppError> {
        if self.gate.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::NotAuthenticated)
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn toggle_view(&mut self) -> Result<View, AppError> {
        self.require_auth()?;
        self.view = self.view.toggle();
        Ok(self.view)
    }

    pub fn toggle_display_mode(&mut self) -> Result<DisplayMode, AppError> {
        self.require_auth()?;
        self.display_mode = self.display_mode.next();
        Ok(self.display_mode)
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), AppError> {
        self.require_auth()?;
        self.display_mode = mode;
        Ok(())
    }

    // Navigation

    pub fn next_day(&mut self) -> Result<NavOutcome, AppError> {
        self.require_auth()?;
        Ok(self.navigator.next_day())
    }

    pub fn previous_day(&mut self) -> Result<NavOutcome, AppError> {
        self.require_auth()?;
        Ok(self.navigator.previous_day())
    }

    pub fn next_week(&mut self) -> Result<NavOutcome, AppError> {
        self.require_auth()?;
        Ok(self.navigator.next_week())
    }

    pub fn previous_week(&mut self) -> Result<NavOutcome, AppError> {
        self.require_auth()?;
        Ok(self.navigator.previous_week())
    }

    pub fn jump_to_today(&mut self) -> Result<NavOutcome, AppError> {
        self.require_auth()?;
        Ok(self.navigator.jump_to_today(self.clock.today()))
    }

    /// Move to the first work day on or after `date`
    pub fn jump_to(&mut self, date: NaiveDate) -> Result<NavOutcome, AppError> {
        self.require_auth()?;
        Ok(self.navigator.jump_to_today(date))
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<NavOutcome, AppError> {
        self.require_auth()?;
        Ok(self.navigator.select_date(date))
    }

    pub fn current_day(&self) -> Result<Option<&WorkDayEntry>, AppError> {
        self.require_auth()?;
        Ok(self.navigator.current())
    }

    /// Position and length of the day list, for "day x of n" displays
    pub fn progress(&self) -> (usize, usize) {
        (self.navigator.position(), self.navigator.len())
    }

    // Events

    pub fn register_event(
        &mut self,
        worker_id: &str,
        date: NaiveDate,
        kind: EventKind,
        note: Option<String>,
    ) -> Result<SpecialEvent, AppError> {
        self.require_auth()?;
        if !rota_core::is_work_day(date) {
            return Err(AppError::NotAWorkDay(date));
        }
        if !kind.allowed_on(date) {
            return Err(AppError::KindNotAllowed { kind, date });
        }
        if !self.roster.contains(worker_id) {
            return Err(AppError::UnknownWorker(worker_id.to_string()));
        }
        Ok(self.register.add(worker_id, date, kind, note)?)
    }

    pub fn delete_event(&mut self, id: &str) -> Result<bool, AppError> {
        self.require_auth()?;
        Ok(self.register.remove(id)?)
    }

    // Views

    pub fn schedule(&self) -> Result<Option<ScheduleView>, AppError> {
        self.require_auth()?;
        let Some(day) = self.navigator.current() else {
            return Ok(None);
        };
        let events = self
            .register
            .events_for_date(day.date)
            .into_iter()
            .map(|e| EventLine::new(e, &self.roster))
            .collect();
        Ok(Some(ScheduleView::new(
            day,
            self.display_mode,
            events,
            self.navigator.can_go_previous(),
            self.navigator.can_go_next(),
        )))
    }

    /// Generated days between `from` and `to`, both inclusive when given
    pub fn work_days(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<DayLine>, AppError> {
        self.require_auth()?;
        Ok(self
            .navigator
            .days()
            .iter()
            .filter(|d| from.map_or(true, |f| d.date >= f))
            .filter(|d| to.map_or(true, |t| d.date <= t))
            .map(|d| DayLine::new(d, self.display_mode))
            .collect())
    }

    pub fn events(&self) -> Result<Vec<EventLine>, AppError> {
        self.require_auth()?;
        Ok(self
            .register
            .events()
            .iter()
            .map(|e| EventLine::new(e, &self.roster))
            .collect())
    }

    pub fn legend(&self) -> Result<Legend, AppError> {
        self.require_auth()?;
        Ok(Legend::new(&self.roster, self.cycle_len))
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

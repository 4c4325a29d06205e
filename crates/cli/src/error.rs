// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use crate::app::AppError;
use chrono::NaiveDate;
use rota_core::EventKind;
use rota_storage::{AuthError, RegisterError};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct RotaError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RotaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for RotaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for RotaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures users actually hit.
impl RotaError {
    pub fn not_logged_in() -> Self {
        RotaError::new("Not logged in")
            .with_context("Every command needs the shared rota password")
            .with_suggestion("Pass it with: rota --password <PASSWORD> ...")
            .with_suggestion("Or export ROTA_PASSWORD")
    }

    pub fn incorrect_password(secret_configured: bool) -> Self {
        let err = RotaError::new("Incorrect password. Please try again.");
        if secret_configured {
            err
        } else {
            err.with_context("No password has been configured, so every login fails")
                .with_suggestion("Set ROTA_SECRET, or `secret = \"...\"` in rota.toml")
        }
    }

    pub fn not_a_work_day(date: NaiveDate) -> Self {
        RotaError::new(format!(
            "{} ({}) is not a work day",
            date,
            date.format("%A")
        ))
        .with_context("Special events can only be recorded on Sundays and Mondays")
        .with_suggestion("List work days: rota days")
    }

    pub fn kind_not_allowed(kind: EventKind, date: NaiveDate) -> Self {
        RotaError::new(format!("'{}' cannot be recorded on a {}", kind, date.format("%A")))
            .with_suggestion(format!("List allowed kinds: rota events kinds --date {}", date))
    }

    pub fn unknown_worker(id: &str) -> Self {
        RotaError::new(format!("Worker '{}' is not on the roster", id))
            .with_suggestion("See the roster: rota legend")
    }

    pub fn event_not_found(id: &str) -> Self {
        RotaError::new(format!("Special event '{}' not found", id))
            .with_context("It may already have been removed")
            .with_suggestion("List events: rota events list")
    }

    pub fn no_work_days() -> Self {
        RotaError::new("The schedule has no work days")
            .with_context("The configured date range contains no Sunday")
            .with_suggestion("Check start_date and end_date in rota.toml")
    }

    pub fn storage(err: RegisterError) -> Self {
        RotaError::new("Could not save special events")
            .with_context(err.to_string())
            .with_suggestion("Check that the data directory is writable (--data-dir / ROTA_DATA_DIR)")
            .with_source(err)
    }
}

impl RotaError {
    /// Translate an application error, knowing whether a secret is set
    pub fn from_app(err: AppError, secret_configured: bool) -> Self {
        match err {
            AppError::NotAuthenticated => RotaError::not_logged_in(),
            AppError::Auth(AuthError::IncorrectPassword) => {
                RotaError::incorrect_password(secret_configured)
            }
            AppError::Auth(AuthError::Storage(e)) => RotaError::new("Session store failed")
                .with_context(e.to_string())
                .with_source(e),
            AppError::Register(e) => RotaError::storage(e),
            AppError::NotAWorkDay(date) => RotaError::not_a_work_day(date),
            AppError::KindNotAllowed { kind, date } => RotaError::kind_not_allowed(kind, date),
            AppError::UnknownWorker(id) => RotaError::unknown_worker(&id),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

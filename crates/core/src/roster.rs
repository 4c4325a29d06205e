// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workers and the roster they belong to

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("worker id must be a single ASCII letter, got '{0}'")]
    InvalidId(String),
    #[error("worker '{id}' name must be exactly \"First Last\", got '{name}'")]
    MalformedName { id: String, name: String },
    #[error("duplicate worker id '{0}'")]
    DuplicateId(String),
    #[error("roster is empty")]
    Empty,
}

/// A worker on the rota.
///
/// Names are exactly two space-separated tokens; this is checked by
/// [`Worker::new`] so the display formatter can split without guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorker")]
pub struct Worker {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct RawWorker {
    id: String,
    name: String,
}

impl TryFrom<RawWorker> for Worker {
    type Error = RosterError;

    fn try_from(raw: RawWorker) -> Result<Self, Self::Error> {
        Worker::new(raw.id, raw.name)
    }
}

impl Worker {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, RosterError> {
        let id = id.into();
        let name = name.into();

        let mut chars = id.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {}
            _ => return Err(RosterError::InvalidId(id)),
        }

        let tokens: Vec<&str> = name.split(' ').collect();
        if tokens.len() != 2 || tokens.iter().any(|t| t.is_empty()) {
            return Err(RosterError::MalformedName { id, name });
        }

        Ok(Self { id, name })
    }

    /// First token of the name
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }

    /// Second token of the name
    pub fn last_name(&self) -> &str {
        self.name.split(' ').nth(1).unwrap_or_default()
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

/// Ordered set of workers. Order is the canonical legend order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    workers: Vec<Worker>,
}

impl Roster {
    pub fn new(workers: Vec<Worker>) -> Result<Self, RosterError> {
        if workers.is_empty() {
            return Err(RosterError::Empty);
        }
        for (i, worker) in workers.iter().enumerate() {
            if workers[..i].iter().any(|w| w.id == worker.id) {
                return Err(RosterError::DuplicateId(worker.id.clone()));
            }
        }
        Ok(Self { workers })
    }

    /// The default seven-person roster
    pub fn default_roster() -> Result<Self, RosterError> {
        Self::new(vec![
            Worker::new("A", "Adenle Jeptha")?,
            Worker::new("B", "Adenle Iyewunmi")?,
            Worker::new("C", "Adegbola Olamilekan")?,
            Worker::new("D", "Bakare Toyosi")?,
            Worker::new("E", "Oloyede Dare")?,
            Worker::new("F", "Orishile Gideon")?,
            Worker::new("G", "Shomulu Kehinde")?,
        ])
    }

    /// Look up a worker by id
    pub fn get(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.workers.iter().map(|w| w.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;

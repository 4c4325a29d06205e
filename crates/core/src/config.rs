// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule configuration
//!
//! Built-in defaults describe the seven-person rota. A TOML file may
//! override any top-level field:
//!
//! ```toml
//! secret = "letmein"
//! start_date = "2025-05-04"
//! end_date = "2026-01-04"
//!
//! [anchor]
//! date = "2025-05-04"
//! index = 0
//!
//! [[roster]]
//! id = "A"
//! name = "Adenle Jeptha"
//!
//! [[cycle]]
//! frontline = ["A", "B"]
//! backline = ["C", "D", "E"]
//! off = ["F", "G"]
//! ```

use crate::roster::{Roster, RosterError, Worker};
use crate::rotation::{Anchor, CycleError, RotationCycle, RotationStep};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid roster: {0}")]
    Roster(#[from] RosterError),
    #[error("invalid cycle: {0}")]
    Cycle(#[from] CycleError),
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// File shape; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    secret: Option<String>,
    anchor: Option<Anchor>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    roster: Option<Vec<Worker>>,
    cycle: Option<Vec<RotationStep>>,
}

/// Validated schedule configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub secret: Option<String>,
    pub anchor: Anchor,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub roster: Roster,
    pub cycle: RotationCycle,
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl ScheduleConfig {
    /// Built-in rota: anchored 2025-05-04 at step 0, running to 2026-01-04
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: None,
            anchor: Anchor {
                date: ymd(2025, 5, 4),
                index: 0,
            },
            start_date: ymd(2025, 5, 4),
            end_date: ymd(2026, 1, 4),
            roster: Roster::default_roster()?,
            cycle: RotationCycle::default_cycle(),
        })
    }

    /// Parse TOML and merge it over the built-in values
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Load from `path`; a missing file yields the built-in config
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using built-in schedule");
            return Self::builtin();
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Replace the secret (from an environment override, say)
    pub fn with_secret(mut self, secret: Option<String>) -> Self {
        if secret.is_some() {
            self.secret = secret;
        }
        self
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut config = Self::builtin()?;
        if let Some(secret) = raw.secret {
            config.secret = Some(secret);
        }
        if let Some(anchor) = raw.anchor {
            config.anchor = anchor;
        }
        if let Some(start) = raw.start_date {
            config.start_date = start;
        }
        if let Some(end) = raw.end_date {
            config.end_date = end;
        }
        if let Some(workers) = raw.roster {
            config.roster = Roster::new(workers)?;
        }
        if let Some(steps) = raw.cycle {
            config.cycle = RotationCycle::new(steps)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_date > self.end_date {
            return Err(ConfigError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        self.cycle.validate_against(&self.roster)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

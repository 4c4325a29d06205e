// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod browse;
pub mod days;
pub mod events;
pub mod legend;
pub mod show;

use crate::app::{App, AppError};
use crate::error::RotaError;
use crate::output::OutputFormat;
use anyhow::Context;
use rota_core::{ScheduleConfig, SystemClock, TimestampIdGen};
use rota_storage::JsonFileStore;
use std::path::PathBuf;

pub type CliApp = App<JsonFileStore, TimestampIdGen, SystemClock>;

/// Global options shared by every command
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub password: Option<String>,
    pub secret: Option<String>,
}

impl Settings {
    fn config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| dirs::config_dir().map(|d| d.join("rota").join("rota.toml")))
    }

    fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join("rota")))
    }
}

/// An opened app plus what error reporting needs to know about it
pub struct Session {
    pub app: CliApp,
    pub secret_configured: bool,
}

impl Session {
    /// Load config, open the data directory and build the app (logged out)
    pub fn open(settings: &Settings) -> anyhow::Result<Self> {
        let config = match settings.config_path() {
            Some(path) => ScheduleConfig::load(&path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ScheduleConfig::builtin()?,
        }
        .with_secret(settings.secret.clone());
        let secret_configured = config.secret.is_some();

        let data_dir = settings.data_dir().ok_or_else(|| {
            RotaError::new("Could not determine a data directory")
                .with_suggestion("Pass --data-dir or set ROTA_DATA_DIR")
        })?;
        let store = JsonFileStore::open(&data_dir)
            .with_context(|| format!("opening data directory {}", data_dir.display()))?;
        tracing::debug!(data_dir = %data_dir.display(), "opened store");

        let app = App::new(config, store, TimestampIdGen::default(), SystemClock)
            .map_err(|e| RotaError::from_app(e, secret_configured))?;
        Ok(Self {
            app,
            secret_configured,
        })
    }

    /// Open and log in with the password from the command line
    pub fn open_authenticated(settings: &Settings) -> anyhow::Result<Self> {
        let mut session = Self::open(settings)?;
        let Some(password) = settings.password.as_deref() else {
            return Err(RotaError::not_logged_in().into());
        };
        session.app.login(password).map_err(|e| session.fail(e))?;
        Ok(session)
    }

    /// Convert an app error into a displayable one
    pub fn fail(&self, err: AppError) -> anyhow::Error {
        RotaError::from_app(err, self.secret_configured).into()
    }
}

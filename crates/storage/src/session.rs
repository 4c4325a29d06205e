// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Password gate with a session-scoped flag
//!
//! This is an access speed bump, not security: the check is a plain
//! comparison against one shared secret.

use crate::kv::{KeyValueStore, StorageError};
use thiserror::Error;

/// Session key holding the login flag
pub const AUTH_KEY: &str = "isAuthenticated";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Incorrect password. Please try again.")]
    IncorrectPassword,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone)]
pub struct SessionGate<S: KeyValueStore> {
    session: S,
    secret: Option<String>,
}

impl<S: KeyValueStore> SessionGate<S> {
    /// With no secret configured every attempt fails
    pub fn new(session: S, secret: Option<String>) -> Self {
        Self { session, secret }
    }

    pub fn authenticate(&self, input: &str) -> Result<(), AuthError> {
        match &self.secret {
            Some(secret) if secret.as_bytes() == input.as_bytes() => {
                self.session.set(AUTH_KEY, "true")?;
                tracing::info!("session authenticated");
                Ok(())
            }
            Some(_) => {
                tracing::debug!("password rejected");
                Err(AuthError::IncorrectPassword)
            }
            None => {
                tracing::warn!("no secret configured, login refused");
                Err(AuthError::IncorrectPassword)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        match self.session.get(AUTH_KEY) {
            Ok(flag) => flag.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!(error = %e, "session flag unreadable");
                false
            }
        }
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.remove(AUTH_KEY)?;
        tracing::info!("session ended");
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! String key-value stores

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid key: '{0}'")]
    InvalidKey(String),
}

/// Durable or session-scoped string storage
pub trait KeyValueStore: Clone {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// One JSON document per key under a base directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at the given path, creating the directory if needed
    pub fn open(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write through a temp file and rename so readers never see a torn document
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        let path = self.path_for(key);
        let tmp = self.base_path.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote document");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        check_key(key)?;
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-lifetime store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        check_key(key)?;
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "kv_tests.rs"]
mod tests;

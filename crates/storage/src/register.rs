// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The special event register
//!
//! An in-memory list mirrored to a single key. Every mutation rewrites the
//! whole list; the in-memory change is applied first, so a failed write
//! leaves memory ahead of disk until the next successful save.

use crate::kv::{KeyValueStore, StorageError};
use chrono::NaiveDate;
use rota_core::{EventKind, IdGen, SpecialEvent};
use serde_json::Value;
use thiserror::Error;

/// Key the event list is persisted under
pub const EVENTS_KEY: &str = "specialEvents";

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<serde_json::Error> for RegisterError {
    fn from(e: serde_json::Error) -> Self {
        RegisterError::Storage(StorageError::Json(e))
    }
}

pub struct EventRegister<S: KeyValueStore, I: IdGen> {
    store: S,
    ids: I,
    events: Vec<SpecialEvent>,
    /// Stored records that did not decode; written back untouched
    unreadable: Vec<Value>,
}

impl<S: KeyValueStore, I: IdGen> EventRegister<S, I> {
    /// Load the persisted list.
    ///
    /// Records are decoded one at a time. A record that does not decode is
    /// logged, hidden from the register and kept for write-back. A document
    /// that is not a JSON array is logged and treated as empty; it is
    /// overwritten by the next mutation.
    pub fn load(store: S, ids: I) -> Result<Self, RegisterError> {
        let records = match store.get(EVENTS_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Value>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(error = %e, "stored events are unreadable, starting empty");
                    Vec::new()
                }
            },
        };

        let mut events = Vec::with_capacity(records.len());
        let mut unreadable = Vec::new();
        for record in records {
            match serde_json::from_value::<SpecialEvent>(record.clone()) {
                Ok(event) => events.push(event),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable stored event");
                    unreadable.push(record);
                }
            }
        }
        tracing::debug!(
            count = events.len(),
            skipped = unreadable.len(),
            "loaded special events"
        );
        Ok(Self {
            store,
            ids,
            events,
            unreadable,
        })
    }

    /// Record a new event and persist the list
    pub fn add(
        &mut self,
        worker_id: &str,
        date: NaiveDate,
        event: EventKind,
        note: Option<String>,
    ) -> Result<SpecialEvent, RegisterError> {
        let record = SpecialEvent {
            id: self.fresh_id(),
            worker_id: worker_id.to_string(),
            date,
            event,
            note: note
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        };
        self.events.push(record.clone());
        tracing::info!(id = %record.id, worker = %record.worker_id, %date, kind = %event, "event added");
        self.save()?;
        Ok(record)
    }

    /// Remove an event by id. Returns false when no event had that id.
    pub fn remove(&mut self, id: &str) -> Result<bool, RegisterError> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            tracing::debug!(id, "no event to remove");
            return Ok(false);
        }
        tracing::info!(id, "event removed");
        self.save()?;
        Ok(true)
    }

    pub fn events(&self) -> &[SpecialEvent] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&SpecialEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&SpecialEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Next generated id not already held by a stored record
    fn fresh_id(&self) -> String {
        loop {
            let id = self.ids.next();
            if !self.id_taken(&id) {
                return id;
            }
            tracing::debug!(%id, "generated id already stored, skipping");
        }
    }

    fn id_taken(&self, id: &str) -> bool {
        self.get(id).is_some()
            || self
                .unreadable
                .iter()
                .any(|r| r.get("id").and_then(Value::as_str) == Some(id))
    }

    fn save(&self) -> Result<(), RegisterError> {
        let mut records = self
            .events
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        records.extend(self.unreadable.iter().cloned());
        let json = serde_json::to_string(&records)?;
        self.store.set(EVENTS_KEY, &json)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rota-storage: persistence for the rota
//!
//! - Key-value stores (JSON files on disk, in-memory for sessions and tests)
//! - The special event register
//! - The password session gate

pub mod kv;
pub mod register;
pub mod session;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
pub use register::{EventRegister, RegisterError, EVENTS_KEY};
pub use session::{AuthError, SessionGate, AUTH_KEY};

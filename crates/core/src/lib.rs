// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rota-core: rotation schedule logic for the `rota` CLI
//!
//! This crate provides:
//! - The roster and the repeating rotation cycle
//! - Work-day generation anchored to a reference week
//! - A clamped cursor for day and week navigation
//! - Name and date formatting
//! - Special event records and schedule configuration

pub mod clock;
pub mod id;

pub mod config;
pub mod display;
pub mod event;
pub mod navigator;
pub mod roster;
pub mod rotation;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, ScheduleConfig};
pub use display::{format_long_date, format_name, pairing_note, DisplayMode};
pub use event::{EventKind, SpecialEvent};
pub use id::{IdGen, SequentialIdGen, TimestampIdGen};
pub use navigator::{default_index, DayNavigator, NavOutcome};
pub use roster::{Roster, RosterError, Worker};
pub use rotation::{
    generate_work_days, is_work_day, step_index_for, week_start, Anchor, CycleError,
    ResolvedRotation, RotationCycle, RotationStep, WorkDayEntry,
};

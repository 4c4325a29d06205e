// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rota events` - special event management

use super::{Session, Settings};
use crate::error::RotaError;
use crate::output::{self, OutputFormat};
use crate::view::EventLine;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rota_core::EventKind;

#[derive(Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Subcommand)]
pub enum EventsCommand {
    /// List recorded events
    List {
        /// Only events on this date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Record an event for a worker
    Add {
        /// Worker id (single letter)
        worker: String,
        /// Sunday or Monday (YYYY-MM-DD)
        date: NaiveDate,
        /// Event kind, e.g. "Absent (Sunday)"; see `rota events kinds`
        event: EventKind,
        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove an event by id
    Remove {
        /// Event id
        id: String,
    },
    /// List event kinds
    Kinds {
        /// Only kinds allowed on this date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn handle(args: EventsArgs, settings: &Settings) -> anyhow::Result<()> {
    match args.command {
        EventsCommand::List { date } => list(date, settings),
        EventsCommand::Add {
            worker,
            date,
            event,
            note,
        } => add(&worker, date, event, note, settings),
        EventsCommand::Remove { id } => remove(&id, settings),
        EventsCommand::Kinds { date } => kinds(date, settings),
    }
}

fn list(date: Option<NaiveDate>, settings: &Settings) -> anyhow::Result<()> {
    let session = Session::open_authenticated(settings)?;
    let mut events = session.app.events().map_err(|e| session.fail(e))?;
    if let Some(date) = date {
        events.retain(|e| e.date == date);
    }
    output::print_list(&events, settings.format, "No special events")?;
    Ok(())
}

fn add(
    worker: &str,
    date: NaiveDate,
    event: EventKind,
    note: Option<String>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let mut session = Session::open_authenticated(settings)?;
    let worker = worker.to_ascii_uppercase();
    let record = session
        .app
        .register_event(&worker, date, event, note)
        .map_err(|e| session.fail(e))?;
    let line = EventLine::new(&record, session.app.roster());

    match settings.format {
        OutputFormat::Text => println!("Added {}", line),
        OutputFormat::Json => output::print(&line, settings.format)?,
    }
    Ok(())
}

fn remove(id: &str, settings: &Settings) -> anyhow::Result<()> {
    let mut session = Session::open_authenticated(settings)?;
    let removed = session.app.delete_event(id).map_err(|e| session.fail(e))?;
    if !removed {
        return Err(RotaError::event_not_found(id).into());
    }
    println!("Removed {}", id);
    Ok(())
}

fn kinds(date: Option<NaiveDate>, settings: &Settings) -> anyhow::Result<()> {
    let kinds = match date {
        Some(date) => EventKind::for_date(date),
        None => EventKind::ALL.to_vec(),
    };
    output::print_list(&kinds, settings.format, "No event kinds apply to that date")?;
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rota show` - the schedule for one day

use super::{Session, Settings};
use crate::error::RotaError;
use crate::output;
use chrono::NaiveDate;
use clap::Args;
use rota_core::DisplayMode;

#[derive(Args)]
pub struct ShowArgs {
    /// Day to show (YYYY-MM-DD); other weekdays show the next work day
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Name display: full, first, last or initials
    #[arg(long)]
    pub display: Option<DisplayMode>,
}

pub fn handle(args: ShowArgs, settings: &Settings) -> anyhow::Result<()> {
    let mut session = Session::open_authenticated(settings)?;

    if let Some(mode) = args.display {
        session
            .app
            .set_display_mode(mode)
            .map_err(|e| session.fail(e))?;
    }
    if let Some(date) = args.date {
        session.app.jump_to(date).map_err(|e| session.fail(e))?;
    }

    let view = session
        .app
        .schedule()
        .map_err(|e| session.fail(e))?
        .ok_or_else(RotaError::no_work_days)?;
    output::print(&view, settings.format)?;
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rota days` - list generated work days

use super::{Session, Settings};
use crate::output;
use chrono::NaiveDate;
use clap::Args;
use rota_core::DisplayMode;

#[derive(Args)]
pub struct DaysArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Name display: full, first, last or initials
    #[arg(long)]
    pub display: Option<DisplayMode>,
}

pub fn handle(args: DaysArgs, settings: &Settings) -> anyhow::Result<()> {
    let mut session = Session::open_authenticated(settings)?;
    if let Some(mode) = args.display {
        session
            .app
            .set_display_mode(mode)
            .map_err(|e| session.fail(e))?;
    }

    let days = session
        .app
        .work_days(args.from, args.to)
        .map_err(|e| session.fail(e))?;
    output::print_list(&days, settings.format, "No work days in range")?;
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rota legend` - roster and rota rules

use super::{Session, Settings};
use crate::output;

pub fn handle(settings: &Settings) -> anyhow::Result<()> {
    let session = Session::open_authenticated(settings)?;
    let legend = session.app.legend().map_err(|e| session.fail(e))?;
    output::print(&legend, settings.format)?;
    Ok(())
}

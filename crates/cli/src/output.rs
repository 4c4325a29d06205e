// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a single value in the specified format
pub fn print<T: Serialize + Display>(value: &T, format: OutputFormat) -> io::Result<()> {
    write_value(&mut io::stdout().lock(), value, format)
}

/// Print a list of items; `empty` is shown in text mode when there are none
pub fn print_list<T: Serialize + Display>(
    items: &[T],
    format: OutputFormat,
    empty: &str,
) -> io::Result<()> {
    write_list(&mut io::stdout().lock(), items, format, empty)
}

pub fn write_value<W: Write, T: Serialize + Display>(
    out: &mut W,
    value: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", value),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

pub fn write_list<W: Write, T: Serialize + Display>(
    out: &mut W,
    items: &[T],
    format: OutputFormat,
    empty: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Text if items.is_empty() => writeln!(out, "{}", empty),
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{}", item)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

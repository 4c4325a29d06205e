// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rota - worker rotation schedule CLI

mod app;
mod commands;
mod error;
mod output;
mod view;

use clap::{Parser, Subcommand};
use commands::{browse, days, events, legend, show, Settings};
use error::RotaError;
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "rota",
    version,
    about = "Worker rotation schedule for Sunday/Monday teams"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Directory holding saved special events
    #[arg(long, global = true, env = "ROTA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Schedule config file (TOML)
    #[arg(long, global = true, env = "ROTA_CONFIG")]
    config: Option<PathBuf>,

    /// Shared rota password
    #[arg(long, global = true, env = "ROTA_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Expected password; overrides `secret` in the config file
    #[arg(long, global = true, env = "ROTA_SECRET", hide = true)]
    secret: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the teams for a day
    Show(show::ShowArgs),
    /// List generated work days
    Days(days::DaysArgs),
    /// Show the worker legend and rota rules
    Legend,
    /// Special event management
    Events(events::EventsArgs),
    /// Interactive schedule browser
    Browse,
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<RotaError>() {
                Some(rota) => eprint!("{}", rota),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings {
        format: cli.format,
        data_dir: cli.data_dir,
        config: cli.config,
        password: cli.password,
        secret: cli.secret,
    };

    match cli.command {
        Commands::Show(args) => show::handle(args, &settings),
        Commands::Days(args) => days::handle(args, &settings),
        Commands::Legend => legend::handle(&settings),
        Commands::Events(args) => events::handle(args, &settings),
        Commands::Browse => browse::handle(&settings),
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warn)
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

//! wfclock library root.
//! Exposes the CLI parser, the high-level run() function and the attendance
//! workflow modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::context::Context;
use cli::parser::{Cli, Commands};
use config::{Config, CredentialStore};
use errors::AppResult;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utils::time::parse_optional_time;

/// Central command dispatcher
pub fn dispatch(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    match cmd {
        Commands::Init => commands::init::handle(ctx),
        Commands::Config { .. } => commands::config::handle(cmd, ctx),
        Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            commands::auth::handle(cmd, ctx)
        }
        Commands::Status
        | Commands::Checkin
        | Commands::Checkout
        | Commands::Press
        | Commands::Watch { .. } => commands::attendance::handle(cmd, ctx),
        Commands::History { .. } => commands::history::handle(cmd, ctx),
        Commands::Log { .. } => commands::log::handle(cmd, ctx),
    }
}

/// Diagnostics go to stderr so they never mix with command output.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = Config::load()?;
    if let Some(api) = &cli.api {
        cfg.api_url = api.clone();
    }
    if let Some(db) = &cli.db {
        cfg.database = db.clone();
    }
    tracing::debug!(api_url = %cfg.api_url, database = %cfg.database, "configuration loaded");

    let ctx = Context {
        creds: CredentialStore::open(Config::credentials_file()),
        at: parse_optional_time(cli.at.as_ref())?,
        test: cli.test,
        cfg,
    };

    dispatch(&cli.command, &ctx)
}

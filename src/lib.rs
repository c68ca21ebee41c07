//! rSurvey library root.
//! Exposes the CLI parser, the high-level run() function, and the modules
//! behind every command (forms, guard, backlog engine, export, API client).

pub mod api;
pub mod backlog;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod forms;
pub mod guard;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::context::AppContext;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter (e.g. `debug`).
pub const LOG_ENV: &str = "RSURVEY_LOG";

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => return commands::init::handle(cli, &cfg),
        Commands::Config { .. } => return commands::config::handle(&cli.command, &cfg),
        _ => {}
    }

    let mut ctx = AppContext::build(cfg)?;

    match &cli.command {
        Commands::Login { .. } => commands::auth::login(&cli.command, &mut ctx).await,
        Commands::Signup { .. } => commands::auth::signup(&cli.command, &mut ctx).await,
        Commands::Logout => commands::auth::logout(&mut ctx),
        Commands::Whoami => commands::auth::whoami(&mut ctx).await,
        Commands::Open { .. } => commands::open::handle(&cli.command, &ctx),
        Commands::Ticket { .. } => commands::ticket::handle(&cli.command, &mut ctx).await,
        Commands::Rate { .. } => commands::rate::handle(&cli.command, &mut ctx).await,
        Commands::Backlog { .. } => commands::backlog::handle(&cli.command, &mut ctx).await,
        Commands::Export { .. } => commands::export::handle(&cli.command, &mut ctx).await,
        Commands::Log { .. } => commands::log::handle(&cli.command, &mut ctx),
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

/// Diagnostics go to stderr; the filter defaults to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, then apply --db / --api-url / env overrides
    let mut cfg = Config::load()?;
    cfg.apply_overrides(cli.db.as_deref(), cli.api_url.as_deref())?;

    // 3️⃣ single-threaded runtime: network calls are the only suspension points
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(&cli, cfg))
}

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod commands;
mod config;
mod context;
mod logging;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::config::{AppConfig, CliOverrides};
use crate::context::AppContext;

/// `AuraFlow` CLI - administration and workflow client
#[derive(Parser)]
#[command(name = "auraflow")]
#[command(about = "AuraFlow CLI - administration and workflow client")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Session cookie value (overrides config)
    #[arg(long, global = true)]
    session_cookie: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (AURAFLOW__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(CliOverrides {
        base_url: cli.base_url,
        session_cookie: cli.session_cookie,
        verbose: cli.verbose,
    });

    logging::init(&config.logging);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("no command given, see `auraflow --help`");
    };

    let ctx = AppContext::connect(&config)?;
    let outcome = commands::run(&ctx, command).await;
    if let Some(login) = ctx.take_redirect() {
        eprintln!("Session expired or missing, sign in again at {login}");
    }
    outcome
}

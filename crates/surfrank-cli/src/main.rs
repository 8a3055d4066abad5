//! Surfrank CLI
//!
//! PageRank for a directory of linked HTML pages.

use anyhow::Result;
use clap::Parser;
use surfrank_core::error::exit_codes;
use surfrank_core::{Config, SurfRankError};

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<SurfRankError>()
            .map(SurfRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Rank(args) => commands::rank::run(args, &config, cli.format),
        Commands::Sample(args) => commands::rank::run_sample(args, &config, cli.format),
        Commands::Iterate(args) => {
            commands::rank::run_iterate(args, &config, cli.format, cli.verbose)
        }
        Commands::Links(args) => commands::links::run(args, cli.format),
    }
}

//! Tally CLI - Bank statement categorizer
//!
//! Usage:
//!   tally serve --port 5001               Start web server
//!   tally categorize "UPI-SWIGGY"         Categorize one description
//!   tally transactions --file CSV         List categorized transactions
//!   tally summary --file CSV              Show spending per category

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            sample_data,
            allowed_origins,
        } => commands::cmd_serve(&host, port, sample_data, &allowed_origins).await,
        Commands::Categorize { description } => commands::cmd_categorize(&description),
        Commands::Transactions { file, other, json } => {
            let store = commands::load_statement(&file)?;
            commands::cmd_transactions_list(&store, other, json)
        }
        Commands::Summary { file, json } => {
            let store = commands::load_statement(&file)?;
            commands::cmd_summary(&store, json)
        }
        Commands::Categories => commands::cmd_categories(),
    }
}

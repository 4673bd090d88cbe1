//! Artist Lookup - a thin CLI client for the Genius music metadata API.
//!
//! Resolves artist names to canonical Genius artist records, either one at
//! a time or as a batch that prints a four-column result table.

pub mod cli;
pub mod config;
pub mod error;
pub mod genius;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("artist_lookup=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}

//! Command-line interface for artist-lookup.
//!
//! This module provides CLI commands for resolving single artists and
//! batch-looking-up artist tables from the Genius API.

mod commands;

pub use commands::{Cli, Commands, run_command};

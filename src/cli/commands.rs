//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed
//! arguments and returns an `anyhow::Result<()>`.

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config;
use crate::genius::{ArtistRecord, GeniusClient, GeniusError};

/// Artist Lookup CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a single artist name to its Genius record
    Resolve {
        /// Artist name to search for
        term: String,
        /// Genius access token (or set GENIUS_ACCESS_TOKEN env var)
        #[arg(short, long, env = "GENIUS_ACCESS_TOKEN")]
        access_token: Option<String>,
    },
    /// Look up multiple artist names and print the result table
    Lookup {
        /// Artist names to look up, one row per name
        terms: Vec<String>,
        /// Genius access token (or set GENIUS_ACCESS_TOKEN env var)
        #[arg(short, long, env = "GENIUS_ACCESS_TOKEN")]
        access_token: Option<String>,
    },
    /// Check whether the access token is configured
    CheckConfig,
}

/// Execute the parsed command.
pub fn run_command(args: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &args.command {
        Commands::Resolve { term, access_token } => {
            cmd_resolve(&rt, term, access_token.as_deref())
        }
        Commands::Lookup {
            terms,
            access_token,
        } => cmd_lookup(&rt, terms, access_token.as_deref()),
        Commands::CheckConfig => cmd_check_config(),
    }
}

/// Build a client or exit with a usable message.
///
/// An explicit flag/env token wins; otherwise the token comes from the
/// environment-backed configuration provider.
fn make_client(access_token: Option<&str>) -> GeniusClient {
    let client = match access_token {
        Some(token) if !token.is_empty() => GeniusClient::new(token.to_string()),
        _ => GeniusClient::from_config(&config::EnvProvider),
    };

    match client {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Get a token at: https://genius.com/api-clients");
            eprintln!("Then use: --access-token YOUR_TOKEN or set GENIUS_ACCESS_TOKEN env var");
            std::process::exit(1);
        }
    }
}

/// Resolve a single artist and print its record
fn cmd_resolve(rt: &Runtime, term: &str, access_token: Option<&str>) -> anyhow::Result<()> {
    let client = make_client(access_token);

    rt.block_on(async {
        match client.resolve_artist(term).await {
            Ok(detail) => {
                let artist = detail.response.artist;
                println!("✓ Match found!");
                println!();
                println!("  Name:      {}", artist.name);
                println!("  ID:        {}", artist.id);
                match artist.followers_count {
                    Some(count) => println!("  Followers: {count}"),
                    None => println!("  Followers: unknown"),
                }
                if let Some(url) = artist.url {
                    println!();
                    println!("  Genius: {url}");
                }
                Ok(())
            }
            Err(GeniusError::NoArtistFound) => {
                println!("✗ No artist found for {term:?}.");
                Ok(())
            }
            Err(e) => Err(crate::error::Error::from(e)),
        }
    })?;
    Ok(())
}

/// Batch lookup: one table row per input name, failures as absent fields
fn cmd_lookup(rt: &Runtime, terms: &[String], access_token: Option<&str>) -> anyhow::Result<()> {
    let client = make_client(access_token);

    rt.block_on(async {
        let records = client.resolve_artists(terms).await;
        print_table(&records);

        let resolved = records.iter().filter(|r| r.artist_id.is_some()).count();
        println!();
        println!(
            "Done! {} resolved, {} not found",
            resolved,
            records.len() - resolved
        );
    });
    Ok(())
}

/// Check whether the access token is configured
fn cmd_check_config() -> anyhow::Result<()> {
    println!("Checking configuration...\n");

    match config::access_token(&config::EnvProvider) {
        Ok(_) => println!("✓ {}: set", config::ACCESS_TOKEN_VAR),
        Err(_) => {
            println!("✗ {}: not set", config::ACCESS_TOKEN_VAR);
            println!("  Get a token at: https://genius.com/api-clients");
        }
    }

    Ok(())
}

/// Print records as an aligned four-column table, absent fields as `-`.
fn print_table(records: &[ArtistRecord]) {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.search_term.clone(),
                r.artist_name.clone().unwrap_or_else(|| "-".to_string()),
                r.artist_id.map_or_else(|| "-".to_string(), |v| v.to_string()),
                r.followers_count
                    .map_or_else(|| "-".to_string(), |v| v.to_string()),
            ]
        })
        .collect();

    let header = ["search_term", "artist_name", "artist_id", "followers_count"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    print_row(&header.map(String::from), &widths);
    print_row(&widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}

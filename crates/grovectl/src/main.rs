//! Grove Control - terminal front-end for the Grove tree game
//!
//! Renders tree state that a chain reader has already exported as JSON;
//! nothing here talks to the chain itself.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grovectl")]
#[command(about = "Grove - water your tree daily, watch it grow", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the status card for a tree record
    Status {
        /// Record JSON exported by the chain reader
        record: PathBuf,
    },

    /// Show the title rank table
    Titles,

    /// Show progress toward the next title
    Progress {
        /// Cumulative days watered
        water_count: u32,

        /// Current title rank (0-4)
        #[arg(default_value_t = 0)]
        rank: u8,
    },

    /// Decode a tree's tokenURI metadata
    Metadata {
        /// tokenURI string (inline data: URI or remote URL)
        uri: String,
    },

    /// Show the resolved configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Status { record } => commands::status(&record),
        Commands::Titles => commands::titles(),
        Commands::Progress { water_count, rank } => commands::progress(water_count, rank),
        Commands::Metadata { uri } => commands::metadata(&uri),
        Commands::Config => commands::config(),
    }
}

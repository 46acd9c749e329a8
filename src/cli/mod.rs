use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::generate_assets;

#[derive(Parser)]
#[command(name = "quantfolio")]
#[command(about = "Quantfolio offline tooling")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the static asset dataset consumed by the frontend
    ///
    /// Records cycle deterministically through the fixed asset universe, so
    /// repeated runs produce identical files.
    GenerateAssets {
        /// Output path for the dataset file
        ///
        /// The parent directory will be created automatically if it doesn't
        /// exist.
        #[arg(
            short,
            long,
            default_value = "workspace/frontend/static/data/assets.json"
        )]
        output: PathBuf,

        /// Number of records to generate
        #[arg(short, long, default_value_t = 100_000)]
        count: usize,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::GenerateAssets {
                output,
                count,
                compact,
            } => {
                generate_assets(&output, count, !compact)?;
            }
        }
        Ok(())
    }
}

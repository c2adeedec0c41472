//! Command-line interface for buildscout.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::adapters::{DdragonCatalog, LeagueOfGraphsFetcher};
use crate::extract::Extractor;

/// buildscout - champion build-report extractor
#[derive(Parser, Debug)]
#[command(name = "buildscout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a build report and print it as JSON
    Extract {
        /// Champion name, free-form (e.g. "Kog'Maw", "wukong")
        champion: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Extract { champion, pretty } => {
                let extractor = Extractor::new(
                    Arc::new(LeagueOfGraphsFetcher::new()),
                    Arc::new(DdragonCatalog::new()),
                );

                let report = extractor.extract(&champion).await?;

                let json = if pretty {
                    serde_json::to_string_pretty(&report)?
                } else {
                    serde_json::to_string(&report)?
                };
                println!("{json}");
                Ok(())
            }
        }
    }
}

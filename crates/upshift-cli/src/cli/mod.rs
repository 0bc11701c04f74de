//! CLI for the upshift scheme switcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use upshift_core::config;

use commands::{run_check, run_validate};

/// Top-level CLI for the upshift scheme switcher.
#[derive(Debug, Parser)]
#[command(name = "upshift")]
#[command(about = "upshift: redirect a site address to its HTTP/HTTPS variant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a page address against the target scheme and report the redirect.
    Check {
        /// Current page address, scheme included.
        url: String,

        /// Site address to redirect to (default: the configured address, or one derived from the page).
        #[arg(long)]
        site: Option<String>,

        /// Switch toward http instead of https.
        #[arg(long)]
        downgrade: bool,
    },

    /// Validate a site address against the URL shape.
    Validate {
        /// Site address, e.g. example.com/reader.
        address: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                url,
                site,
                downgrade,
            } => run_check(&cfg, &url, site, downgrade)?,
            CliCommand::Validate { address } => run_validate(&address)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

//! CLI for the sdsdl SDS PDF downloader.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sdsdl_core::config::{self, SdsConfig};
use std::path::PathBuf;

use commands::{run_download, run_scrape, run_urls};

/// Top-level CLI for sdsdl.
#[derive(Debug, Parser)]
#[command(name = "sdsdl")]
#[command(about = "sdsdl: download the SDS PDFs listed in a local snapshot", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/sdsdl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the records come from and how URLs are built.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Snapshot JSON file (default: main.json).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Base endpoint the document URLs are built on.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Abort if the snapshot cannot be read or parsed instead of running with zero records.
    #[arg(long)]
    pub strict: bool,
}

impl InputArgs {
    fn apply(&self, cfg: &mut SdsConfig) {
        if let Some(p) = &self.input {
            cfg.input_path = p.clone();
        }
        if let Some(u) = &self.base_url {
            cfg.base_url = u.clone();
        }
        if self.strict {
            cfg.strict_input = true;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every PDF referenced by the snapshot, skipping files already on disk.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Directory the PDFs are written into (default: PDFs).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Per-request HTTP timeout in seconds (default: 30).
        #[arg(long, value_name = "N")]
        timeout_secs: Option<u64>,
    },

    /// Print the de-duplicated URL list and the filename each one maps to (no network).
    Urls {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Fetch the document listing and save it as the local snapshot.
    Scrape {
        /// Listing endpoint to fetch.
        #[arg(long, value_name = "URL")]
        listing_url: Option<String>,

        /// Where to save the snapshot (default: the configured input path).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };

        match cli.command {
            CliCommand::Run {
                input,
                output_dir,
                timeout_secs,
            } => {
                input.apply(&mut cfg);
                if let Some(dir) = output_dir {
                    cfg.output_dir = dir;
                }
                if let Some(secs) = timeout_secs {
                    cfg.http.timeout_secs = secs;
                }
                cfg.validate()?;
                tracing::debug!("effective config: {:?}", cfg);
                run_download(&cfg)?;
            }
            CliCommand::Urls { input } => {
                input.apply(&mut cfg);
                cfg.validate()?;
                run_urls(&cfg)?;
            }
            CliCommand::Scrape {
                listing_url,
                output,
            } => {
                if let Some(u) = listing_url {
                    cfg.listing_url = u;
                }
                cfg.validate()?;
                let dest = output.unwrap_or_else(|| cfg.input_path.clone());
                run_scrape(&cfg, &dest)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

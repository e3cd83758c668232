//! CLI for the pdfdl PDF batch fetcher.

mod commands;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pdfdl_core::config::{self, PdfdlConfig};
use std::path::PathBuf;

use commands::{run_fetch, run_plan};
pub use source::SourceArgs;

/// Top-level CLI for pdfdl.
#[derive(Debug, Parser)]
#[command(name = "pdfdl")]
#[command(about = "pdfdl: fetch a list of PDFs into a directory, skipping files already there", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/pdfdl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to ~/.local/state/pdfdl/pdfdl.log instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every URL in the list, one at a time.
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Total timeout per request in seconds (overrides config).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Exit with status 1 if any download failed.
        #[arg(long)]
        strict: bool,
    },

    /// Show what `run` would fetch and where, without touching the network.
    Plan {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Run {
                source,
                timeout,
                strict,
            } => {
                if let Some(secs) = timeout {
                    cfg.timeout_secs = secs;
                }
                let urls = source.resolve_urls(&cfg)?;
                run_fetch(&cfg, &source.output_dir(&cfg), &urls, strict)?;
            }
            CliCommand::Plan { source } => {
                let urls = source.resolve_urls(&cfg)?;
                run_plan(&source.output_dir(&cfg), &urls);
            }
        }

        Ok(())
    }

    fn load_config(&self) -> Result<PdfdlConfig> {
        if let Some(path) = &self.config {
            return config::load_from_path(path);
        }
        match config::load_or_init() {
            Ok(cfg) => Ok(cfg),
            Err(e) => {
                tracing::warn!("using built-in defaults, config unavailable: {:#}", e);
                Ok(PdfdlConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests;

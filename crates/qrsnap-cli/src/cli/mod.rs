//! CLI for qrsnap.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qrsnap_core::config;
use qrsnap_core::provider::ProviderRegistry;
use std::path::PathBuf;

use commands::{run_classify, run_drive, run_providers, run_replay_har, run_resolve};

/// Top-level CLI for qrsnap.
#[derive(Debug, Parser)]
#[command(name = "qrsnap")]
#[command(about = "qrsnap: resolve the real photo behind a photo-booth QR code", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/qrsnap/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List known providers and their keywords, in match order.
    Providers,

    /// Show which provider a URL belongs to.
    Classify {
        /// Event URL (request or download).
        url: String,
        /// Page URL at the time of the event.
        #[arg(long)]
        page_url: Option<String>,
    },

    /// Resolve a single observed URL to the real media URL.
    Resolve {
        /// Event URL (request or download).
        url: String,
        /// Page URL at the time of the event.
        #[arg(long)]
        page_url: Option<String>,
        /// Treat the URL as a download event instead of a network request.
        #[arg(long)]
        download: bool,
    },

    /// Replay a HAR capture of a page load through one resolution session.
    ReplayHar {
        /// Path to the HAR file.
        path: PathBuf,
        /// Page URL to use instead of the one found in the capture.
        #[arg(long)]
        page_url: Option<String>,
    },

    /// Drive the full pipeline from a script (or stdin) against an in-memory browser.
    ///
    /// One step per line: `scan <payload>`, `page <url>`, `request <url>`,
    /// `download <url>`, `restart`, `deny`. Blank lines and `#` comments are skipped.
    Drive {
        /// Script file; reads stdin when omitted.
        script: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let registry = ProviderRegistry::from_config(&cfg);

        match cli.command {
            CliCommand::Providers => run_providers(&registry),
            CliCommand::Classify { url, page_url } => {
                run_classify(&registry, &url, page_url.as_deref())
            }
            CliCommand::Resolve {
                url,
                page_url,
                download,
            } => run_resolve(&registry, &url, page_url.as_deref(), download),
            CliCommand::ReplayHar { path, page_url } => {
                run_replay_har(registry, &path, page_url.as_deref())?
            }
            CliCommand::Drive { script } => run_drive(&cfg, registry, script.as_deref()).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use dref_core::config;
use dref_core::session::BearerTokenProvider;
use dref_core::Resolver;

/// Top-level CLI for the dref design reference resolver.
#[derive(Debug, Parser)]
#[command(name = "dref")]
#[command(about = "dref: resolve design references to document bytes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a design reference and write the document bytes.
    Resolve {
        /// URI-formatted design reference: file://, http(s)://, or
        /// <tag>+http(s):// for identity-authenticated services.
        reference: String,

        /// Write the document to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the registered reference schemes.
    Schemes,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let sessions = BearerTokenProvider::from_config(&cfg);
        let resolver = Resolver::new(Arc::new(sessions));

        match cli.command {
            CliCommand::Resolve { reference, output } => {
                let bytes = resolver
                    .resolve(&reference)
                    .with_context(|| format!("resolving {reference}"))?;
                match output {
                    Some(path) => std::fs::write(&path, &bytes)
                        .with_context(|| format!("writing {}", path.display()))?,
                    None => std::io::stdout()
                        .write_all(&bytes)
                        .context("writing document to stdout")?,
                }
                tracing::info!("resolved {} ({} bytes)", reference, bytes.len());
            }
            CliCommand::Schemes => {
                for scheme in resolver.registry().schemes() {
                    println!("{scheme}");
                }
            }
        }

        Ok(())
    }
}

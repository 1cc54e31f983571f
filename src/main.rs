//! Aheui - runs a source file against the process's standard streams
//!
//! The process exits with the program's exit value.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aheui::{CodespaceBuilder, CodespaceOptions, ColumnAddressing, Machine};

#[derive(Parser, Debug)]
#[command(name = "aheui", version)]
#[command(about = "Run an Aheui program")]
struct Cli {
    /// Path to the source file
    source: PathBuf,

    /// Address columns by UTF-8 byte offset / 3, like the historical interpreter
    #[arg(long)]
    legacy_columns: bool,

    /// Print the decoded codespace as JSON to stderr before running
    #[arg(long)]
    dump_codespace: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aheui=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(exit_value) => std::process::exit(exit_value as i32),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i64> {
    let source = std::fs::read_to_string(&cli.source)
        .with_context(|| format!("failed to read {}", cli.source.display()))?;

    let options = CodespaceOptions {
        column_addressing: if cli.legacy_columns {
            ColumnAddressing::LegacyByteOffset
        } else {
            ColumnAddressing::PerCharacter
        },
    };
    let codespace = CodespaceBuilder::with_options(options).build(&source);
    debug!(path = %cli.source.display(), "loaded program");

    if cli.dump_codespace {
        let json = serde_json::to_string_pretty(&codespace).context("failed to dump codespace")?;
        eprintln!("{}", json);
    }

    let exit_value = Machine::new(codespace).run()?;
    Ok(exit_value)
}

//! `engtext` CLI - Command-line interface for text resource files

pub mod commands;

use clap::Parser;
use commands::Commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "engtext")]
#[command(about = "engtext: grouped text resource XML tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug logging (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the `engtext` CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute()?;

    Ok(())
}

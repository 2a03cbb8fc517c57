//! amigacat CLI - Command-line interface for Amiga catalog files

pub mod commands;
pub mod output;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "amigacat")]
#[command(about = "amigacat: inspect and look up Amiga locale catalogs", long_about = None)]
#[command(version = crate::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the amigacat CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}

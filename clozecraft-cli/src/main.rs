//! Clozecraft command-line entry point

use clap::Parser;
use clozecraft_cli::commands::Commands;

/// Turn bilingual text into cloze and read-aloud segments
#[derive(Debug, Parser)]
#[command(name = "clozecraft", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

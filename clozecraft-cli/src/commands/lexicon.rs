//! Lexicon command implementation

use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::error::CliResult;

/// Arguments for the lexicon command
#[derive(Debug, Args)]
pub struct LexiconArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl LexiconArgs {
    /// Execute the lexicon command.
    ///
    /// Prints the embedded French lexicon TOML so users can copy it,
    /// edit the word lists, and pass the file back with `--lexicon`.
    pub fn execute(&self) -> CliResult<()> {
        let template = clozecraft_core::lexicon::embedded_french();

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!("Lexicon template written to {}", path.display());
                eprintln!("Edit the word lists, then pass --lexicon {}", path.display());
            }
            None => print!("{template}"),
        }
        Ok(())
    }
}

//! Candidates command implementation

use clap::Args;
use clozecraft_core::extract_candidates;

use super::CommonArgs;
use crate::error::CliResult;

/// Arguments for the candidates command
#[derive(Debug, Args)]
pub struct CandidatesArgs {
    /// Shared input/output options
    #[command(flatten)]
    pub common: CommonArgs,
}

impl CandidatesArgs {
    /// Execute the candidates command
    pub fn execute(&self) -> CliResult<()> {
        self.common.init_logging();

        let text = self.common.read_text()?;
        let lexicon = self.common.load_lexicon()?;
        let candidates = extract_candidates(&text, &lexicon);
        log::info!("extracted {} candidates", candidates.len());

        let mut formatter = self.common.formatter()?;
        for candidate in &candidates {
            formatter.format_candidate(candidate)?;
        }
        formatter.finish()
    }
}

//! Cloze command implementation

use anyhow::bail;
use clap::Args;
use clozecraft_core::{build_cloze_segments, extract_candidates, SegmentRole};

use super::CommonArgs;
use crate::error::CliResult;

/// Arguments for the cloze command
#[derive(Debug, Args)]
pub struct ClozeArgs {
    /// Shared input/output options
    #[command(flatten)]
    pub common: CommonArgs,

    /// Word or phrase to blank out (repeatable, order matters for
    /// overlapping phrases)
    #[arg(short, long = "blank", value_name = "WORD")]
    pub blanks: Vec<String>,

    /// Blank every extracted candidate instead of an explicit list
    #[arg(short, long, conflicts_with = "blanks")]
    pub auto: bool,
}

impl ClozeArgs {
    /// Execute the cloze command
    pub fn execute(&self) -> CliResult<()> {
        self.common.init_logging();

        let text = self.common.read_text()?;
        let selected = if self.auto {
            let lexicon = self.common.load_lexicon()?;
            extract_candidates(&text, &lexicon)
        } else if self.blanks.is_empty() {
            bail!("no candidates selected; pass --blank at least once or use --auto");
        } else {
            self.blanks.clone()
        };

        let segments = build_cloze_segments(&text, &selected)?;
        let blank_count = segments
            .iter()
            .filter(|s| s.role == SegmentRole::Blank)
            .count();
        log::info!(
            "built {} segments ({} blanks) from {} candidates",
            segments.len(),
            blank_count,
            selected.len()
        );

        let mut formatter = self.common.formatter()?;
        for segment in &segments {
            formatter.format_segment(segment)?;
        }
        formatter.finish()
    }
}

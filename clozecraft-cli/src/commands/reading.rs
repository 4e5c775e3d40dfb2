//! Reading command implementation

use clap::Args;
use clozecraft_core::build_reading_segments;

use super::CommonArgs;
use crate::error::CliResult;

/// Arguments for the reading command
#[derive(Debug, Args)]
pub struct ReadingArgs {
    /// Shared input/output options
    #[command(flatten)]
    pub common: CommonArgs,
}

impl ReadingArgs {
    /// Execute the reading command
    pub fn execute(&self) -> CliResult<()> {
        self.common.init_logging();

        let text = self.common.read_text()?;
        let segments = build_reading_segments(&text);
        log::info!("built {} reading segments", segments.len());

        let mut formatter = self.common.formatter()?;
        for segment in &segments {
            formatter.format_segment(segment)?;
        }
        formatter.finish()
    }
}

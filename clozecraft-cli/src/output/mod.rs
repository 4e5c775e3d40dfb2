//! Output formatting module

use anyhow::Result;
use clozecraft_core::Segment;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single segment
    fn format_segment(&mut self, segment: &Segment) -> Result<()>;

    /// Format and output a single extraction candidate
    fn format_candidate(&mut self, candidate: &str) -> Result<()>;

    /// Finalize output (e.g. close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

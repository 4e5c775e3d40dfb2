//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use clozecraft_core::Segment;
use std::io::Write;

/// JSON formatter - collects everything and emits one pretty-printed
/// array on finish. Segments serialize in the canonical shape (`id` as a
/// number for blanks, `"chunk-<n>"` for text chunks); candidates as a
/// plain string array.
pub struct JsonFormatter<W: Write> {
    writer: W,
    segments: Vec<Segment>,
    candidates: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segments: Vec::new(),
            candidates: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        self.segments.push(segment.clone());
        Ok(())
    }

    fn format_candidate(&mut self, candidate: &str) -> Result<()> {
        self.candidates.push(candidate.to_string());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.candidates.is_empty() && self.segments.is_empty() {
            serde_json::to_writer_pretty(&mut self.writer, &self.candidates)?;
        } else {
            serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

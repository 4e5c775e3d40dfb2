//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use clozecraft_core::Segment;
use std::io::Write;

/// Text formatter.
///
/// Segments print one per line as tab-separated
/// `index role type id value`, with newlines and tabs in the value
/// escaped so the line structure survives. Candidates print bare, one
/// per line.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn escape_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}\t{}",
            segment.index,
            segment.role,
            segment.kind,
            segment.id,
            escape_value(&segment.value)
        )?;
        Ok(())
    }

    fn format_candidate(&mut self, candidate: &str) -> Result<()> {
        writeln!(self.writer, "{candidate}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clozecraft_core::{ChunkType, SegmentId, SegmentRole};

    #[test]
    fn segment_line_is_tab_separated() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter
            .format_segment(&Segment {
                index: 0,
                id: SegmentId::Blank(1),
                role: SegmentRole::Blank,
                kind: ChunkType::Fr,
                value: "café".to_string(),
            })
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "0\tblank\tfr\t1\tcafé\n");
    }

    #[test]
    fn newlines_in_values_are_escaped() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter
            .format_segment(&Segment {
                index: 3,
                id: SegmentId::Chunk(2),
                role: SegmentRole::Text,
                kind: ChunkType::Cn,
                value: "第一幕\n\n".to_string(),
            })
            .unwrap();

        let line = String::from_utf8(buffer).unwrap();
        assert_eq!(line, "3\ttext\tcn\tchunk-2\t第一幕\\n\\n\n");
    }
}

//! Cloze segment builder
//!
//! Splits the source text into alternating text and blank segments from a
//! chosen candidate list. Matching is a single case-insensitive
//! alternation over the escaped candidates, scanned left to right, so the
//! segments partition the text exactly.

use regex::RegexBuilder;

use crate::error::Result;
use crate::segment::{normalize, RawPart, Segment};

/// Build cloze segments for `text` from the selected `candidates`.
///
/// Every match becomes a `blank` segment with a 1-based id in match
/// order; the gaps become `text` segments, re-split and script-typed by
/// the normalizer. With no candidates the whole text is one text part.
///
/// Candidate order matters when candidates overlap at the same start
/// position: the alternation keeps list order, and the regex engine
/// prefers the earlier alternative. Callers should keep the list to a
/// sane size; a pathological number of alternation branches fails pattern
/// compilation rather than degrading silently.
pub fn build_cloze_segments<S: AsRef<str>>(text: &str, candidates: &[S]) -> Result<Vec<Segment>> {
    let selected: Vec<&str> = candidates
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| !c.is_empty())
        .collect();

    if selected.is_empty() {
        return Ok(normalize(vec![RawPart::Text {
            value: text.to_string(),
        }]));
    }

    let pattern = selected
        .iter()
        .map(|c| regex::escape(c))
        .collect::<Vec<_>>()
        .join("|");
    let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

    let mut parts = Vec::new();
    let mut last_end = 0;
    let mut blank_id = 0u32;
    for found in regex.find_iter(text) {
        if found.start() > last_end {
            parts.push(RawPart::Text {
                value: text[last_end..found.start()].to_string(),
            });
        }
        blank_id += 1;
        parts.push(RawPart::Blank {
            id: blank_id,
            value: found.as_str().to_string(),
        });
        last_end = found.end();
    }
    if last_end < text.len() {
        parts.push(RawPart::Text {
            value: text[last_end..].to_string(),
        });
    }

    Ok(normalize(parts))
}

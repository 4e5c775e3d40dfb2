//! Reading segment builder
//!
//! Splits the full text into a flat, ordered sequence of language-tagged
//! chunks for sequential read-aloud and keyboard navigation. Sentence
//! separators stay attached to the chunk they close, and punctuation-only
//! fragments are merged into a neighboring meaningful chunk so every
//! emitted segment contains something pronounceable.

use crate::script::{classify_char, digit_context, is_foreign_letter, is_ideograph, Script};
use crate::segment::{detect_chunk_type, ChunkType, Segment, SegmentId, SegmentRole};

/// Terminal punctuation that ends a sentence-level token, ASCII and
/// fullwidth forms.
fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '。' | '．' | '!' | '！' | '?' | '？' | ':' | '：')
}

fn is_horizontal_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{3000}')
}

fn is_newline(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

/// Does this text carry any pronounceable character?
fn is_meaningful(value: &str) -> bool {
    value
        .chars()
        .any(|ch| is_foreign_letter(ch) || is_ideograph(ch) || ch.is_ascii_digit())
}

/// Build reading segments for `text`.
///
/// The concatenation of the returned segment values reproduces `text`
/// exactly. No segment is punctuation-only unless the entire input is.
pub fn build_reading_segments(text: &str) -> Vec<Segment> {
    let mut chunks: Vec<(ChunkType, String)> = Vec::new();
    // Separator tokens seen before any chunk exists wait here and attach
    // to the front of the first chunk produced.
    let mut pending_prefix = String::new();

    for token in split_sentences(text) {
        if !is_meaningful(token) {
            match chunks.last_mut() {
                Some((_, value)) => value.push_str(token),
                None => pending_prefix.push_str(token),
            }
            continue;
        }

        for (kind, run) in scan_runs(token) {
            if chunks.is_empty() && !pending_prefix.is_empty() {
                let mut value = std::mem::take(&mut pending_prefix);
                value.push_str(&run);
                chunks.push((kind, value));
            } else {
                chunks.push((kind, run));
            }
        }
    }

    let chunks = merge_noise(chunks, pending_prefix);

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, (kind, value))| Segment {
            index: i,
            id: SegmentId::Chunk(i as u32 + 1),
            role: SegmentRole::Text,
            kind,
            value,
        })
        .collect()
}

/// Split into sentence-level tokens on hard separators.
///
/// Terminator runs stay attached to the end of the preceding token along
/// with any trailing horizontal whitespace; newline runs become their own
/// tokens. A separator hit with nothing accumulated yields a
/// separator-only token, handled by the caller.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((pos, ch)) = iter.next() {
        if is_newline(ch) {
            if pos > start {
                tokens.push(&text[start..pos]);
            }
            let mut end = pos + ch.len_utf8();
            while let Some(&(next_pos, next_ch)) = iter.peek() {
                if !is_newline(next_ch) {
                    break;
                }
                iter.next();
                end = next_pos + next_ch.len_utf8();
            }
            tokens.push(&text[pos..end]);
            start = end;
        } else if is_terminator(ch) {
            let mut end = pos + ch.len_utf8();
            while let Some(&(next_pos, next_ch)) = iter.peek() {
                if !is_terminator(next_ch) {
                    break;
                }
                iter.next();
                end = next_pos + next_ch.len_utf8();
            }
            while let Some(&(next_pos, next_ch)) = iter.peek() {
                if !is_horizontal_space(next_ch) {
                    break;
                }
                iter.next();
                end = next_pos + next_ch.len_utf8();
            }
            tokens.push(&text[start..end]);
            start = end;
        }
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Scan one sentence token into contiguous language runs.
///
/// Letters fix the run type; digits take it from their neighborhood
/// within the token; whitespace and leftover symbols extend whatever run
/// is open (ideographic when none is), so only a real script change
/// flushes.
fn scan_runs(token: &str) -> Vec<(ChunkType, String)> {
    let chars: Vec<char> = token.chars().collect();
    let mut runs = Vec::new();
    let mut current_kind: Option<ChunkType> = None;
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        let want = match classify_char(ch) {
            Script::Foreign => ChunkType::Fr,
            Script::Ideographic => ChunkType::Cn,
            Script::Digit => match digit_context(&chars, i) {
                Script::Foreign => ChunkType::Fr,
                _ => ChunkType::Cn,
            },
            Script::Punct => current_kind.unwrap_or(ChunkType::Cn),
        };

        match current_kind {
            Some(kind) if kind != want => {
                runs.push((kind, std::mem::take(&mut current)));
                current_kind = Some(want);
            }
            _ => current_kind = Some(want),
        }
        current.push(ch);
    }

    if let Some(kind) = current_kind {
        runs.push((kind, current));
    }
    runs
}

/// Fold punctuation-only chunks into a meaningful neighbor: as a prefix
/// of the next one, or a suffix of the last one at the tail. Pure-noise
/// input degenerates to a single chunk.
fn merge_noise(
    chunks: Vec<(ChunkType, String)>,
    leftover_prefix: String,
) -> Vec<(ChunkType, String)> {
    let mut merged: Vec<(ChunkType, String)> = Vec::new();
    let mut noise = leftover_prefix;

    for (kind, value) in chunks {
        if is_meaningful(&value) {
            if noise.is_empty() {
                merged.push((kind, value));
            } else {
                noise.push_str(&value);
                merged.push((kind, std::mem::take(&mut noise)));
            }
        } else {
            noise.push_str(&value);
        }
    }

    if !noise.is_empty() {
        match merged.last_mut() {
            Some((_, value)) => value.push_str(&noise),
            None => merged.push((detect_chunk_type(&noise), noise)),
        }
    }

    merged
}

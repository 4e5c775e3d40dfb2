//! Segment value objects and the normalizer
//!
//! A [`Segment`] is the durable output unit of both builders: an indexed,
//! typed, literal slice of the source text. Segments partition the input
//! exactly: concatenating their values reproduces the source verbatim.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::script::{is_foreign_letter, is_ideograph};

/// Whether a segment is fillable in cloze mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentRole {
    /// A hidden candidate the learner types back in
    Blank,
    /// Plain surrounding text
    Text,
}

impl fmt::Display for SegmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SegmentRole::Blank => "blank",
            SegmentRole::Text => "text",
        })
    }
}

/// Script type of a segment, used to pick the read-aloud voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkType {
    /// Foreign-script (Latin) run
    Fr,
    /// Ideographic (CJK) run
    Cn,
    /// Punctuation, whitespace, symbols
    Punct,
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChunkType::Fr => "fr",
            ChunkType::Cn => "cn",
            ChunkType::Punct => "punct",
        })
    }
}

/// Stable identifier within one build.
///
/// Blanks get small positive integers in first-seen order; text chunks get
/// synthetic `chunk-<n>` labels. Serialized as a bare number or the label
/// string respectively, so the two are distinguishable in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentId {
    /// 1-based blank counter
    Blank(u32),
    /// 1-based text chunk counter
    Chunk(u32),
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentId::Blank(n) => write!(f, "{n}"),
            SegmentId::Chunk(n) => write!(f, "chunk-{n}"),
        }
    }
}

impl Serialize for SegmentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SegmentId::Blank(n) => serializer.serialize_u32(*n),
            SegmentId::Chunk(n) => serializer.serialize_str(&format!("chunk-{n}")),
        }
    }
}

impl<'de> Deserialize<'de> for SegmentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = SegmentId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a blank number or a \"chunk-<n>\" string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<SegmentId, E> {
                u32::try_from(v)
                    .map(SegmentId::Blank)
                    .map_err(|_| E::custom("blank id out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<SegmentId, E> {
                let n = v
                    .strip_prefix("chunk-")
                    .and_then(|rest| rest.parse().ok())
                    .ok_or_else(|| E::custom(format!("invalid chunk id: {v}")))?;
                Ok(SegmentId::Chunk(n))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// One typed, indexed slice of the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Zero-based position in the final linear order
    pub index: usize,
    /// Stable identifier within this build
    pub id: SegmentId,
    /// Blank or plain text
    pub role: SegmentRole,
    /// Script type
    #[serde(rename = "type")]
    pub kind: ChunkType,
    /// The literal substring this segment represents
    pub value: String,
}

/// Pre-normalization output of the cloze builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPart {
    /// A matched candidate, with its 1-based blank id
    Blank {
        /// Blank counter in match order
        id: u32,
        /// Matched substring with original casing
        value: String,
    },
    /// A gap between matches
    Text {
        /// Literal gap text
        value: String,
    },
}

/// Hard separators that bound text chunks: sentence punctuation in ASCII
/// and fullwidth forms, plus all whitespace.
pub(crate) fn is_separator(ch: char) -> bool {
    matches!(
        ch,
        '，' | ',' | '。' | '.' | ';' | '；' | '！' | '？' | '!' | '?' | '、' | '：' | ':'
    ) || ch.is_whitespace()
}

/// Script type of a whole chunk, by content priority: any ideograph makes
/// it `cn`, otherwise any foreign letter makes it `fr`, otherwise `punct`.
pub(crate) fn detect_chunk_type(value: &str) -> ChunkType {
    if value.chars().any(is_ideograph) {
        ChunkType::Cn
    } else if value.chars().any(is_foreign_letter) {
        ChunkType::Fr
    } else {
        ChunkType::Punct
    }
}

/// Split a text part on separator runs, keeping the separators as their
/// own pieces. A part with no letter of either script is left whole so
/// pure punctuation does not shatter into fragments.
pub(crate) fn split_text_part(value: &str) -> Vec<&str> {
    if value.is_empty() {
        return Vec::new();
    }
    if !value.chars().any(|ch| is_ideograph(ch) || is_foreign_letter(ch)) {
        return vec![value];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_separator = None;
    for (pos, ch) in value.char_indices() {
        let sep = is_separator(ch);
        match in_separator {
            Some(prev) if prev != sep => {
                pieces.push(&value[start..pos]);
                start = pos;
            }
            _ => {}
        }
        in_separator = Some(sep);
    }
    pieces.push(&value[start..]);
    pieces
}

/// Normalize raw parts into canonical segments.
///
/// Assigns the zero-based `index` across the flattened output. Blank parts
/// pass through one-to-one; text parts are re-split on separator runs and
/// script-typed piece by piece, each with a fresh `chunk-<n>` id.
pub fn normalize(parts: Vec<RawPart>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chunk_counter = 0u32;

    for part in parts {
        match part {
            RawPart::Blank { id, value } => {
                if value.is_empty() {
                    continue;
                }
                segments.push(Segment {
                    index: segments.len(),
                    id: SegmentId::Blank(id),
                    role: SegmentRole::Blank,
                    kind: ChunkType::Fr,
                    value,
                });
            }
            RawPart::Text { value } => {
                for piece in split_text_part(&value) {
                    if piece.is_empty() {
                        continue;
                    }
                    chunk_counter += 1;
                    segments.push(Segment {
                        index: segments.len(),
                        id: SegmentId::Chunk(chunk_counter),
                        role: SegmentRole::Text,
                        kind: detect_chunk_type(piece),
                        value: piece.to_string(),
                    });
                }
            }
        }
    }

    segments
}

//! Cloze and read-aloud segmentation for bilingual language-learning text
//!
//! This crate turns pasted mixed-script text (a Latin-script target
//! language embedded in CJK base text) into typed, indexed segments:
//!
//! - [`extract_candidates`] scans for foreign-language terms eligible to
//!   become blanks, expanding article pairs, reflexive constructions and
//!   fixed idioms into multi-word candidates.
//! - [`build_cloze_segments`] splits the text into alternating text and
//!   blank segments from a chosen candidate list.
//! - [`build_reading_segments`] splits the text into language-tagged
//!   chunks for sequential read-aloud traversal.
//!
//! Everything is pure, synchronous computation over in-memory strings;
//! identical input always yields identical output. The word sets driving
//! extraction live in a TOML [`Lexicon`] (French embedded, custom files
//! supported).
//!
//! ```
//! use clozecraft_core::{extract_candidates, build_cloze_segments, Lexicon};
//!
//! let lexicon = Lexicon::french()?;
//! let text = "J'aime le café.";
//! let candidates = extract_candidates(text, lexicon);
//! let segments = build_cloze_segments(text, &candidates)?;
//! let rebuilt: String = segments.iter().map(|s| s.value.as_str()).collect();
//! assert_eq!(rebuilt, text);
//! # Ok::<(), clozecraft_core::CoreError>(())
//! ```

#![warn(missing_docs)]

pub mod cloze;
pub mod error;
pub mod extract;
pub mod lexicon;
pub mod reading;
pub mod script;
pub mod segment;

pub use cloze::build_cloze_segments;
pub use error::{CoreError, Result};
pub use extract::extract_candidates;
pub use lexicon::{Lexicon, LexiconConfig};
pub use reading::build_reading_segments;
pub use script::{classify_char, Script};
pub use segment::{normalize, ChunkType, RawPart, Segment, SegmentId, SegmentRole};

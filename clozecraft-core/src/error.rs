//! Core error types

use thiserror::Error;

/// Errors produced by the segmentation core
#[derive(Error, Debug)]
pub enum CoreError {
    /// Lexicon data failed validation
    #[error("invalid lexicon: {reason}")]
    InvalidLexicon {
        /// Why the lexicon was rejected
        reason: String,
    },

    /// Lexicon TOML could not be parsed
    #[error("failed to parse lexicon config: {0}")]
    LexiconParse(#[from] toml::de::Error),

    /// No embedded lexicon for the requested language code
    #[error("unknown language code: {code}")]
    UnknownLanguage {
        /// The language code that was requested
        code: String,
    },

    /// The cloze alternation pattern could not be compiled
    #[error("failed to build candidate pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid input pattern
    InvalidPattern(String),
    /// Lexicon file rejected
    InvalidLexicon(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid input pattern: {pattern}"),
            CliError::InvalidLexicon(msg) => write!(f, "Invalid lexicon: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let error = CliError::FileNotFound("scene.txt".to_string());
        assert_eq!(error.to_string(), "File not found: scene.txt");
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = CliError::InvalidPattern("[bad".to_string());
        assert_eq!(error.to_string(), "Invalid input pattern: [bad");
    }

    #[test]
    fn test_invalid_lexicon_display() {
        let error = CliError::InvalidLexicon("idiom 'seul' is not a two-word phrase".to_string());
        assert!(error.to_string().starts_with("Invalid lexicon:"));
    }
}

//! Input resolution
//!
//! Gathers the source text from a literal `--text` argument, from files
//! and glob patterns, or from stdin (`-`). Multiple files concatenate in
//! resolution order, separated by a newline, so a multi-part scene can be
//! segmented as one document.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Resolve the text to process from CLI inputs.
///
/// `literal` wins when present. Otherwise each entry of `inputs` is
/// either `-` (stdin), an existing file path, or a glob pattern. An empty
/// `inputs` list falls back to stdin.
pub fn read_input(inputs: &[String], literal: Option<&str>) -> Result<String> {
    if let Some(text) = literal {
        return Ok(text.to_string());
    }

    if inputs.is_empty() {
        return read_stdin();
    }

    let mut pieces = Vec::new();
    for entry in inputs {
        if entry == "-" {
            pieces.push(read_stdin()?);
        } else {
            for path in resolve_entry(entry)? {
                log::debug!("reading {path}");
                let content =
                    fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
                pieces.push(content);
            }
        }
    }
    Ok(pieces.join("\n"))
}

/// Expand one input entry into concrete file paths.
fn resolve_entry(entry: &str) -> Result<Vec<String>> {
    if !entry.contains(['*', '?', '[']) {
        if !Path::new(entry).exists() {
            return Err(CliError::FileNotFound(entry.to_string()).into());
        }
        return Ok(vec![entry.to_string()]);
    }

    let paths = glob::glob(entry)
        .map_err(|_| CliError::InvalidPattern(entry.to_string()))?
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file())
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>();

    if paths.is_empty() {
        return Err(CliError::FileNotFound(entry.to_string()).into());
    }
    Ok(paths)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn literal_text_wins() {
        let text = read_input(&["missing.txt".to_string()], Some("你好 Paris")).unwrap();
        assert_eq!(text, "你好 Paris");
    }

    #[test]
    fn reads_a_single_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.txt");
        fs::write(&path, "le chat").unwrap();

        let text = read_input(&[path.display().to_string()], None).unwrap();
        assert_eq!(text, "le chat");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_input(&["/nonexistent/scene.txt".to_string()], None).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn glob_concatenates_matches_in_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "première").unwrap();
        fs::write(dir.path().join("b.txt"), "deuxième").unwrap();

        let pattern = dir.path().join("*.txt").display().to_string();
        let text = read_input(&[pattern], None).unwrap();
        assert_eq!(text, "première\ndeuxième");
    }

    #[test]
    fn glob_with_no_match_is_an_error() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("*.md").display().to_string();
        let err = read_input(&[pattern], None).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}

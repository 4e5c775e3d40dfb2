//! Clozecraft CLI library
//!
//! This library provides the command-line interface for the clozecraft
//! segmentation engine: candidate extraction, cloze building, and
//! reading-mode chunking over files or stdin.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

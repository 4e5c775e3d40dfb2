//! CLI command implementations

use anyhow::Context;
use clap::{Args, Subcommand};
use clozecraft_core::Lexicon;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};
use crate::input::read_input;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

pub mod candidates;
pub mod cloze;
pub mod lexicon;
pub mod reading;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract cloze candidates from text
    Candidates(candidates::CandidatesArgs),

    /// Build cloze (fill-in-the-blank) segments
    Cloze(cloze::ClozeArgs),

    /// Build read-aloud segments with language tags
    Reading(reading::ReadingArgs),

    /// Print the embedded lexicon as a template for customization
    Lexicon(lexicon::LexiconArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Candidates(args) => args.execute(),
            Commands::Cloze(args) => args.execute(),
            Commands::Reading(args) => args.execute(),
            Commands::Lexicon(args) => args.execute(),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated lines, one segment or candidate per line
    Text,
    /// JSON array
    Json,
}

/// Options shared by the text-processing commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input files or glob patterns, '-' for stdin (default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Literal text to process instead of reading input files
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Custom lexicon TOML file (default: embedded French)
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Gather the text to process
    pub fn read_text(&self) -> CliResult<String> {
        read_input(&self.input, self.text.as_deref())
    }

    /// Load the lexicon: a custom TOML file when given, the embedded
    /// French lexicon otherwise.
    pub fn load_lexicon(&self) -> CliResult<Lexicon> {
        match &self.lexicon {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("failed to read lexicon {}", path.display()))?;
                Lexicon::from_toml_str(&content)
                    .map_err(|e| CliError::InvalidLexicon(e.to_string()).into())
            }
            None => Ok(clozecraft_core::Lexicon::french()?.clone()),
        }
    }

    /// Open the output destination
    pub fn writer(&self) -> CliResult<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = fs::File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(std::io::stdout())),
        }
    }

    /// Build the formatter for the selected format
    pub fn formatter(&self) -> CliResult<Box<dyn OutputFormatter>> {
        let writer = self.writer()?;
        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }
}

//! Command line argument parsing for the Tempora CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tempora - a rule-based tense classifier for English sentences
#[derive(Parser, Debug, Clone)]
#[command(name = "tempora")]
#[command(about = "A rule-based grammatical tense classifier for English sentences")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Tempora Contributors")]
#[command(long_about = None)]
pub struct TemporaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TemporaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single sentence
    Classify(ClassifyArgs),

    /// Classify sentences from a JSONL file
    Batch(BatchArgs),
}

/// Arguments for classifying a single sentence
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// The sentence to classify
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,
}

/// Arguments for batch classification
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Input file with one JSON record per line: {"sentence": "..."}
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Stop at the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

/// Output formats supported by the CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON output
    Json,
}

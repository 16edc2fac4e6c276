//! CLI argument parsing for shiftcrack

use crate::recovery::Scoring;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// What the tool should do with its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Encrypt input text
    Encode,
    /// Decrypt input text
    Decode,
    /// Build a letter-frequency model from a text corpus
    Train,
    /// Recover a Caesar-encrypted text using a frequency model
    Hack,
}

#[derive(Parser, Debug)]
#[command(name = "shiftcrack")]
#[command(version)]
#[command(about = "Caesar and Vigenère ciphers with frequency-analysis shift recovery", long_about = None)]
pub struct Cli {
    /// Operation to perform
    #[arg(value_enum)]
    pub mode: Mode,

    /// File to process (default: stdin)
    #[arg(long = "input-file", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Result file (default: stdout)
    #[arg(long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Cipher to use: caesar or vigenere (default from settings: caesar)
    #[arg(long = "cipher", value_name = "NAME")]
    pub cipher: Option<String>,

    /// Integer shift for caesar, letter key for vigenere
    #[arg(long = "key", value_name = "KEY", default_value = "0", allow_hyphen_values = true)]
    pub key: String,

    /// Corpus to analyze in train mode (default: --input-file or stdin)
    #[arg(long = "text-file", value_name = "PATH")]
    pub text_file: Option<PathBuf>,

    /// Model to write in train mode, or reference model to read in hack mode
    #[arg(long = "model-file", value_name = "PATH")]
    pub model_file: Option<PathBuf>,

    /// Frequency scoring for hack mode (overrides settings)
    #[arg(long = "scoring", value_enum)]
    pub scoring: Option<Scoring>,

    /// TOML settings file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

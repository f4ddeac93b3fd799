// retrans/src/cli.rs
//! This file defines the command-line interface (CLI) for the retrans application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "retrans",
    version = env!("CARGO_PKG_VERSION"),
    about = "Transliterate words with ordered regular-expression mappings",
    long_about = "retrans applies a sequence of substitution mappings to words. Each mapping is an ordered list of regular-expression patterns and replacements; mappings run one after another, each on the output of the previous one.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `retrans` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transliterates words given as arguments, from a file, or from stdin.
    #[command(about = "Transliterates words given as arguments, from a file, or from stdin.")]
    Apply(ApplyCommand),

    /// Loads and validates a mapping file without transliterating anything.
    #[command(about = "Validates a mapping file.")]
    Check(CheckCommand),
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyCommand {
    /// Mapping file (YAML or JSON).
    #[arg(long, short = 'm', value_name = "FILE", help = "Path to the mapping file (.yaml, .yml or .json).")]
    pub mappings: PathBuf,

    /// Read words from this file, one per line.
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "words", help = "Read words from a file, one per line, instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write transliterated words to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Words to transliterate, one per argument; a word may not contain a line break.
    /// Reads stdin when empty and no input file is given.
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Mapping file (YAML or JSON).
    #[arg(long, short = 'm', value_name = "FILE", help = "Path to the mapping file (.yaml, .yml or .json).")]
    pub mappings: PathBuf,
}

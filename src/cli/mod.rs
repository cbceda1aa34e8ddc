//! CLI module for robotparse
//!
//! A thin consumer of the model API for looking at data files from the shell.
//!
//! ## Commands
//!
//! - `check <path>...` - Parse files and report every error in them
//! - `tokens <path>` - Print the token stream of a file
//! - `tree <path>` - Print the model structure of a file
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use robotparse_core::FileKind;

use crate::model::ModelError;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ModelError> for CliError {
    fn from(err: ModelError) -> Self {
        Self::failure(format!("Error: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parse and inspect Robot Framework data files
#[derive(Parser, Debug)]
#[command(name = "robotparse")]
#[command(version = VERSION)]
#[command(about = "Parse and inspect Robot Framework data files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse files and report every error in them
    Check {
        /// Files to check
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
        #[command(flatten)]
        grammar: GrammarArgs,
        /// Print errors as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the token stream of a file
    Tokens {
        /// File to lex
        #[arg(value_name = "PATH")]
        path: PathBuf,
        #[command(flatten)]
        grammar: GrammarArgs,
        /// Drop separators, line ends and comments
        #[arg(long)]
        data_only: bool,
    },

    /// Print the model structure of a file
    Tree {
        /// File to parse
        #[arg(value_name = "PATH")]
        path: PathBuf,
        #[command(flatten)]
        grammar: GrammarArgs,
    },
}

/// Which grammar to read files with.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct GrammarArgs {
    /// Read files as resource files
    #[arg(long, conflicts_with = "init")]
    pub resource: bool,
    /// Read files as suite initialization files
    #[arg(long)]
    pub init: bool,
}

impl GrammarArgs {
    pub fn kind(self) -> FileKind {
        if self.resource {
            FileKind::Resource
        } else if self.init {
            FileKind::Init
        } else {
            FileKind::Suite
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Check { paths, grammar, json } => commands::check_files(&paths, grammar.kind(), json),
        Command::Tokens {
            path,
            grammar,
            data_only,
        } => commands::print_tokens(&path, grammar.kind(), data_only),
        Command::Tree { path, grammar } => commands::print_tree(&path, grammar.kind()),
    }
}

// ============================================================================
// Tests
// ============================================================================

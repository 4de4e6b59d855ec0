//! CLI module for the pede compiler
//!
//! This module provides the command-line interface for the compiler.
//!
//! ## Commands
//!
//! - `build <file>` - Compile to a native executable (via clang)
//! - `emit-ir <file>` - Print the generated LLVM IR
//! - `lex <file>` / `parse <file>` - Dump tokens / AST (debug)
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

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::backend::Target;
use crate::backend::toolchain::DEFAULT_CC;
use crate::version::PEDE_VERSION;

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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The pede programming language compiler
#[derive(Parser, Debug)]
#[command(name = "pede")]
#[command(version = PEDE_VERSION)]
#[command(about = "The pede programming language compiler", long_about = None)]
#[command(after_help = "pede links through clang by default; install it or pass --cc to `pede build`.")]
pub struct Cli {
    /// Log level; takes precedence over RUST_LOG
    #[arg(long = "log", value_name = "LEVEL", value_enum, ignore_case = true, global = true)]
    pub log: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a .pede file into a native executable
    Build(BuildArgs),

    /// Print the generated LLVM IR to stdout
    EmitIr {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Tokenize only (debug)
    Lex {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse only (debug)
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Source file to compile
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output binary name (default: input file name without extension)
    #[arg(short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Keep the generated LLVM IR file (default: delete after linking)
    #[arg(long = "keep-ir")]
    pub keep_ir: bool,

    /// C compiler used to link the IR (clang or gcc)
    #[arg(long = "cc", value_name = "COMPILER", default_value = DEFAULT_CC)]
    pub cc: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Operating system target: darwin, linux, windows (default: current OS)
    #[arg(long = "os", value_name = "OS")]
    pub os: Option<String>,

    /// Architecture target: amd64, arm64 (default: current architecture)
    #[arg(long = "arch", value_name = "ARCH")]
    pub arch: Option<String>,
}

impl TargetArgs {
    /// Requested target, with the host filling in whatever was not given.
    pub fn resolve(&self) -> Target {
        let host = Target::host();
        let target = Target::from_os_arch(
            self.os.clone().unwrap_or(host.os),
            self.arch.clone().unwrap_or(host.arch),
        );
        if !target.is_known() {
            tracing::warn!(%target, "no target triple for this os/arch; the linker will use its default");
        }
        target
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Filter used when neither `--log` nor a usable `RUST_LOG` is given.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Pick the log filter: `--log` wins, then `RUST_LOG` (`rust_log`), then [`DEFAULT_LOG_DIRECTIVE`].
///
/// An empty or unparsable `RUST_LOG` counts as unset.
pub fn log_filter(log: Option<LogLevel>, rust_log: Option<&str>) -> EnvFilter {
    if let Some(level) = log {
        return EnvFilter::new(level.directive());
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run(cli: Cli) {
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Build(args) => commands::build_file(&args),
        Command::EmitIr { file, target } => commands::emit_ir(&file, &target.resolve()),
        Command::Lex { file } => commands::lex_file(&file),
        Command::Parse { file } => commands::parse_file(&file),
    }
}

// ============================================================================
// Tests
// ============================================================================

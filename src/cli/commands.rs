//! Command implementations for the CLI
//!
//! All functions return `CliResult<T>` instead of calling `process::exit`.

use std::io::{self, Write};
use std::path::Path;

use miette::{Diagnostic, NamedSource};

use super::{BuildArgs, CliError, CliResult, ExitCode};
use crate::CompileFailure;
use crate::backend::Target;
use crate::backend::toolchain::{self, BuildConfig, BuildError};
use crate::frontend::preprocessor::{PreprocessConfig, preprocess};
use crate::frontend::{lexer, parser};

/// Read and preprocess a source file.
fn read_source(file_path: &Path) -> CliResult<String> {
    let raw = std::fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("error: cannot read '{}': {e}", file_path.display())))?;
    Ok(preprocess(&raw, &PreprocessConfig::default()))
}

/// Build a native executable.
pub fn build_file(args: &BuildArgs) -> CliResult<ExitCode> {
    let mut config = BuildConfig::new(&args.file)
        .with_target(args.target.resolve())
        .with_keep_ir(args.keep_ir)
        .with_cc(&args.cc);
    if let Some(output) = &args.output {
        config = config.with_output(output);
    }
    if config.output.as_os_str().is_empty() {
        return Err(CliError::failure(
            "error: could not determine output file name; use -o",
        ));
    }

    let artifacts = toolchain::build(&config).map_err(build_error)?;
    if let Some(ir_file) = artifacts.ir_file {
        tracing::info!(file = %ir_file.display(), "kept IR");
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the IR for `file_path` to stdout.
pub fn emit_ir(file_path: &Path, target: &Target) -> CliResult<ExitCode> {
    let (_, module) =
        toolchain::compile_file(file_path, target, &PreprocessConfig::default()).map_err(build_error)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    module
        .serialize(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| CliError::failure(format!("error: cannot write IR: {e}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Tokenize a file and print one token per line.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source)
        .map_err(|err| compile_failure(file_path, &source, CompileFailure::Syntax(err)))?;

    for token in &tokens {
        println!("{:>4}:{:<3} {}", token.position.line, token.position.column, token);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print the AST.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let program = parser::parse(&source)
        .map_err(|err| compile_failure(file_path, &source, CompileFailure::Syntax(err)))?;

    println!("{program:#?}");
    Ok(ExitCode::SUCCESS)
}

fn build_error(err: BuildError) -> CliError {
    match err {
        BuildError::Compile {
            path,
            preprocessed,
            failure,
        } => compile_failure(&path, &preprocessed, failure),
        other => CliError::failure(format!("error: {other}")),
    }
}

/// Render a rejected program against the text its positions refer to.
pub(crate) fn compile_failure(path: &Path, preprocessed: &str, failure: CompileFailure) -> CliError {
    match failure {
        // Caret rendering is already part of the message.
        CompileFailure::Syntax(err) => CliError::failure(format!("error: {}: {err}", path.display())),
        CompileFailure::Codegen(err) => CliError::failure(render_report(path, preprocessed, err)),
    }
}

fn render_report<D>(path: &Path, source: &str, diagnostic: D) -> String
where
    D: Diagnostic + Send + Sync + 'static,
{
    let report = miette::Report::new(diagnostic)
        .with_source_code(NamedSource::new(path.display().to_string(), source.to_string()));
    format!("{report:?}")
}

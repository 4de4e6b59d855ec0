#![forbid(unsafe_code)]
//! pede compiler
//!
//! pede is a tiny language of assignments and `print` statements over numbers and strings. This crate compiles it to
//! textual LLVM IR and, through an external C compiler, to native executables.
//!
//! ```text
//! source → preprocessor → lexer → parser → AST → lowering → IR module → .ll → clang → executable
//! ```
//!
//! The lexer, parser and AST live in the `pede_syntax` crate and are re-exported through [`frontend`].
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.
//!
//! ## Examples
//!
//! ```rust
//! let module = pede::compile("x = 2 + 3 * 4\nprint(x)\n", "linux", "amd64").unwrap();
//! let ir = module.to_string();
//! assert!(ir.contains("define void @main()"));
//! assert!(ir.contains("call i32 (i8*, ...) @printf"));
//! ```

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use backend::ir::Module;
pub use backend::{CodegenError, IrCodegen, Target};

use frontend::diagnostics::CompileError;

/// Why [`compile`] rejected a program.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CompileFailure {
    /// Lexical or syntax error.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] CompileError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Codegen(#[from] CodegenError),
}

/// Compile preprocessed `source` for the `os`/`arch` pair (target-table spelling, e.g. `linux`/`amd64`).
///
/// An unknown or empty pair compiles with no target triple, leaving the choice to the backend toolchain.
///
/// ## Errors
///
/// The first lexical, syntax, or code generation error.
pub fn compile(source: &str, os: &str, arch: &str) -> Result<Module, CompileFailure> {
    compile_for(source, &Target::from_os_arch(os, arch))
}

/// [`compile`] with an already-built [`Target`].
#[tracing::instrument(skip_all, fields(target = %target, source_len = source.len()))]
pub fn compile_for(source: &str, target: &Target) -> Result<Module, CompileFailure> {
    let program = parser::parse(source)?;
    let module = backend::generate(&program, target)?;
    Ok(module)
}

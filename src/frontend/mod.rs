//! pede compiler frontend
//!
//! This module groups the frontend components:
//! - `preprocessor`: comment and blank-line stripping ahead of lexing
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into AST
//! - `ast`: abstract syntax tree definitions
//! - `diagnostics`: lexical/syntax error type and caret rendering

// Syntax components are provided by the shared pede_syntax crate.
pub use pede_syntax::{ast, diagnostics, lexer, parser};

pub mod preprocessor;

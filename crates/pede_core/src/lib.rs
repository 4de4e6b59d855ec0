//! Canonical language vocabulary for the pede compiler.
//!
//! This crate is intentionally small and dependency-free. It answers "which spellings does the
//! language reserve, and what do they mean" so the lexer, parser and backend never compare raw
//! strings against vocabulary.
//!
//! ## Notes
//!
//! - No IO, no global state, no compiler-specific types (no tokens, no AST).
//! - Adding a keyword or operator starts here: extend the id enum and its registry table, then teach the
//!   lexer/parser about it.

pub mod lang;

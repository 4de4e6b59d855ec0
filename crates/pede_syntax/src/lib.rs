//! Syntax frontend for the pede language: lexer, parser, AST, diagnostics.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not resolve names, check categories, or emit IR. Those belong to the
//!   backend in the `pede` crate, which depends on this one and never the other way around.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `pede_core::lang` registries.
//! - Both stages are fail-fast: the first lexical or syntax error is returned and nothing after it is examined.
//!
//! ## Examples
//! ```rust
//! use pede_syntax::parser;
//!
//! let program = parser::parse("x = 1\nprint(x)\n").unwrap();
//! assert_eq!(program.statements.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

//! Parser for the pede language
//!
//! Recursive descent over a pulled token stream with exactly one token of lookahead.
//!
//! ```text
//! Program    := (Statement)* EOF
//! Statement  := Assignment | PrintStmt
//! Assignment := IDENT '=' Expr
//! PrintStmt  := 'print' '(' Expr ')'
//! Expr       := Term ('+' Term)*
//! Term       := Factor ('*' Factor)*
//! Factor     := NUMBER | IDENT | STRING
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use pede_syntax::parser;
//!
//! let ast = parser::parse("x = 2 + 3 * 4\nprint(x)\n").unwrap();
//! assert_eq!(ast.statements.len(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Lexer, Token, TokenKind};
use pede_core::lang::keywords::KeywordId;
use pede_core::lang::operators::OperatorId;
use pede_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");

//! Token types for the pede lexer.
//!
//! Vocabulary tokens carry **registry-backed IDs** from `pede_core::lang`:
//! - `Keyword(KeywordId)` for reserved words (`print`)
//! - `Operator(OperatorId)` for `+`, `*` and `=`
//! - `Punctuation(PunctuationId)` for `(` and `)`
//!
//! Literal and identifier tokens keep their spelling in `Token::text`.

use std::fmt;

use crate::ast::Span;
use crate::diagnostics::Position;
use pede_core::lang::keywords::{self, KeywordId};
use pede_core::lang::operators::{self, OperatorId};
use pede_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    /// Run of ASCII digits; the value is parsed from `Token::text`.
    Number,
    /// Double-quoted string; `Token::text` holds the contents without quotes.
    String,

    // ========== Layout ==========
    Newline,
    Eof,
}

/// A token with its spelling, byte span and start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            position,
        }
    }
}

/// Human-readable token description used in parser messages, e.g. `identifier 'x'` or `'+'`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(id)),
            TokenKind::Ident => write!(f, "identifier '{}'", self.text),
            TokenKind::Number => write!(f, "number '{}'", self.text),
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

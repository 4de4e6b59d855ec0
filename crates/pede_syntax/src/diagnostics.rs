//! Diagnostics for the pede frontend.
//!
//! Lexical and syntax errors share one type, [`CompileError`]. Its `Display` form is the classic caret rendering:
//!
//! ```text
//! expected '=' after identifier at Line 1, column 3:
//! x 5
//!   ^
//! ```
//!
//! The error also implements [`miette::Diagnostic`] (stable code plus a labelled span) so tools that prefer
//! graphical reports can render it against a `NamedSource`.

use std::fmt;

use crate::ast::Span;
use crate::lexer::Token;

/// 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lex => write!(f, "lexical error"),
            Stage::Parse => write!(f, "syntax error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `"` with no closing quote before end of line or end of input.
    UnterminatedString,
    UnknownCharacter(char),
    UnexpectedToken,
}

impl ErrorKind {
    pub fn stage(&self) -> Stage {
        match self {
            ErrorKind::UnterminatedString | ErrorKind::UnknownCharacter(_) => Stage::Lex,
            ErrorKind::UnexpectedToken => Stage::Parse,
        }
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::UnterminatedString => "pede::lex::unterminated_string",
            ErrorKind::UnknownCharacter(_) => "pede::lex::unknown_character",
            ErrorKind::UnexpectedToken => "pede::parse::unexpected_token",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ErrorKind::UnterminatedString => "string starts here",
            ErrorKind::UnknownCharacter(_) => "not part of the language",
            ErrorKind::UnexpectedToken => "unexpected here",
        }
    }
}

/// A lexical or syntax error with the location it was detected at.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "{message} at Line {line}, column {column}:\n{line_source}\n{caret}",
    line = .position.line,
    column = .position.column,
    caret = caret_line(.position.column)
)]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub position: Position,
    /// Full text of the offending line, without its newline.
    pub line_source: String,
    pub span: Span,
    /// The token that triggered a syntax error, when there is one.
    pub found: Option<Token>,
}

impl CompileError {
    pub fn lexical(kind: ErrorKind, message: impl Into<String>, position: Position, line_source: &str, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
            line_source: line_source.to_string(),
            span,
            found: None,
        }
    }

    /// Syntax error located at the start of `found`.
    pub fn syntax(message: impl Into<String>, found: Token, line_source: &str) -> Self {
        Self {
            kind: ErrorKind::UnexpectedToken,
            message: message.into(),
            position: found.position,
            line_source: line_source.to_string(),
            span: found.span,
            found: Some(found),
        }
    }

    pub fn stage(&self) -> Stage {
        self.kind.stage()
    }
}

/// `column - 1` spaces followed by a caret.
fn caret_line(column: usize) -> String {
    format!("{}^", " ".repeat(column.saturating_sub(1)))
}

impl miette::Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.kind {
            ErrorKind::UnterminatedString => Some(Box::new("strings must close with '\"' on the same line")),
            ErrorKind::UnknownCharacter(_) => Some(Box::new(
                "pede understands letters, digits, '=', '+', '*', '(', ')' and double-quoted strings",
            )),
            ErrorKind::UnexpectedToken => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let label = miette::LabeledSpan::new_with_span(Some(self.kind.label().to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

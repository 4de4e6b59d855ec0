//! Lexer for the pede language
//!
//! A pull-based scanner: each [`Lexer::next_token`] call returns exactly one token, or the first lexical error.
//! Positions are tracked as 1-based line/column (columns count characters) alongside byte spans.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::{CompileError, ErrorKind, Position};
use pede_core::lang::operators;
use pede_core::lang::punctuation;

/// Lexer for pede source code.
///
/// ## Notes
/// - Only `\n` ends a line; every other whitespace character is skipped.
/// - After the end of input every call keeps returning `Eof`.
pub struct Lexer {
    chars: Vec<char>,
    /// Cursor into `chars`.
    pos: usize,
    /// Byte offset of the cursor, for spans.
    byte_pos: usize,
    line: usize,
    column: usize,
    /// Index into `chars` where the current line starts.
    line_start: usize,
    /// Line start in effect when the last token began.
    token_line_start: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            byte_pos: 0,
            line: 1,
            column: 1,
            line_start: 0,
            token_line_start: 0,
        }
    }

    /// Produce the next token.
    ///
    /// ## Errors
    /// - `UnterminatedString` when a `"` is not closed on its own line.
    /// - `UnknownCharacter` for anything outside the language's alphabet.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        self.skip_whitespace();

        self.token_line_start = self.line_start;
        let start = self.byte_pos;
        let position = Position::new(self.line, self.column);

        let Some(c) = self.advance() else {
            return Ok(Token::new(TokenKind::Eof, "", Span::new(start, start), position));
        };

        if c == '\n' {
            return Ok(Token::new(TokenKind::Newline, "\n", Span::new(start, self.byte_pos), position));
        }
        if c.is_ascii_digit() {
            return Ok(self.scan_number(start, position, c));
        }
        if is_ident_char(c) {
            return Ok(self.scan_identifier(start, position, c));
        }
        if c == '"' {
            return self.scan_string(start, position);
        }

        let span = Span::new(start, self.byte_pos);
        if let Some(id) = operators::from_char(c) {
            return Ok(Token::new(TokenKind::Operator(id), c, span, position));
        }
        if let Some(id) = punctuation::from_char(c) {
            return Ok(Token::new(TokenKind::Punctuation(id), c, span, position));
        }

        Err(CompileError::lexical(
            ErrorKind::UnknownCharacter(c),
            format!("unknown character '{c}'"),
            position,
            &self.line_text(self.token_line_start),
            span,
        ))
    }

    /// Lex the whole input, up to and including the first `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Source text of the line the most recent token started on, without its newline.
    pub fn current_token_line(&self) -> String {
        self.line_text(self.token_line_start)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        self.byte_pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.line_start = self.pos;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c != '\n' && c.is_whitespace()) {
            self.advance();
        }
    }

    fn line_text(&self, from: usize) -> String {
        self.chars[from.min(self.chars.len())..]
            .iter()
            .take_while(|&&c| c != '\n')
            .collect()
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, position: Position, first: char) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.peek().filter(|&c| is_ident_char(c)) {
            text.push(c);
            self.advance();
        }

        let span = Span::new(start, self.byte_pos);
        match keyword_id(&text) {
            Some(id) => Token::new(TokenKind::Keyword(id), text, span, position),
            None => Token::new(TokenKind::Ident, text, span, position),
        }
    }
}

/// Identifiers are runs of ASCII letters only; digits and `_` are not part of a name.
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::debug!(count = tokens.len(), "lexed tokens");
    Ok(tokens)
}

// ============================================================================
// TESTS
// ============================================================================

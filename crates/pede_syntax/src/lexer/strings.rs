//! String literal scanning for the pede lexer.
//!
//! Strings are double-quoted, single-line and have no escape sequences: every character between the quotes is taken
//! verbatim.

use super::Lexer;
use super::tokens::{Token, TokenKind};
use crate::ast::Span;
use crate::diagnostics::{CompileError, ErrorKind, Position};

impl Lexer {
    /// Scan a string literal whose opening quote has already been consumed.
    ///
    /// `start` and `open` locate the opening quote; an unterminated literal is reported there.
    pub(super) fn scan_string(&mut self, start: usize, open: Position) -> Result<Token, CompileError> {
        let mut text = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    return Ok(Token::new(TokenKind::String, text, Span::new(start, self.byte_pos), open));
                }
                Some('\n') | None => {
                    return Err(CompileError::lexical(
                        ErrorKind::UnterminatedString,
                        "unterminated string",
                        open,
                        &self.line_text(self.token_line_start),
                        Span::new(start, self.byte_pos),
                    ));
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
    }
}

//! Number scanning for the pede lexer.
//!
//! Only unsigned decimal digit runs exist in the language; there is no fraction, exponent or separator syntax.

use super::Lexer;
use super::tokens::{Token, TokenKind};
use crate::ast::Span;
use crate::diagnostics::Position;

impl Lexer {
    /// Scan a maximal run of ASCII digits starting with the already-consumed `first`.
    pub(super) fn scan_number(&mut self, start: usize, position: Position, first: char) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            text.push(c);
            self.advance();
        }
        Token::new(TokenKind::Number, text, Span::new(start, self.byte_pos), position)
    }
}

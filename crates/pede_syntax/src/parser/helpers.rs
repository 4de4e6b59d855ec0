/// Token-stream helpers.
///
/// Consuming a token immediately pulls the next one from the lexer, so every helper that
/// can consume returns a `Result`: lexical errors surface at the point of consumption.
impl Parser {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn is_at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }

    fn peek(&self) -> &Token {
        &self.current
    }

    /// Consume the lookahead, refill it from the lexer, and return the consumed token.
    fn advance(&mut self) -> Result<Token, CompileError> {
        let next = self.lexer.next_token()?;
        self.current_line = self.lexer.current_token_line();
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.current.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.current.is_operator(id)
    }

    /// Consume the lookahead if it is the operator `id`.
    fn match_op(&mut self, id: OperatorId) -> Result<bool, CompileError> {
        if self.check_op(id) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_op(&mut self, id: OperatorId, msg: &str) -> Result<Token, CompileError> {
        if self.check_op(id) {
            self.advance()
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<Token, CompileError> {
        if self.check_punct(id) {
            self.advance()
        } else {
            Err(self.error_here(msg))
        }
    }

    fn skip_newlines(&mut self) -> Result<(), CompileError> {
        while self.current.kind.is_newline() {
            self.advance()?;
        }
        Ok(())
    }

    /// Syntax error anchored at the lookahead token.
    fn error_here(&self, msg: impl Into<String>) -> CompileError {
        CompileError::syntax(msg, self.current.clone(), &self.current_line)
    }
}

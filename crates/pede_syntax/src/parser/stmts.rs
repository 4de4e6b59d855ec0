/// Statement parsing methods.
impl Parser {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Spanned<Statement>, CompileError> {
        if self.check_keyword(KeywordId::Print) {
            return self.print_stmt();
        }
        match self.peek().kind {
            TokenKind::Ident => self.assignment(),
            _ => Err(self.error_here(format!("unexpected token {} at start of statement", self.peek()))),
        }
    }

    /// `IDENT '=' Expr`
    fn assignment(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let name = self.advance()?;
        self.expect_op(OperatorId::Eq, "expected '=' after identifier")?;
        let value = self.expression()?;

        let span = name.span.merge(value.span);
        Ok(Spanned::new(
            Statement::Assignment(AssignmentStmt {
                name: name.text,
                name_span: name.span,
                value,
            }),
            span,
        ))
    }

    /// `'print' '(' Expr ')'`
    fn print_stmt(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let keyword = self.advance()?;
        self.expect_punct(PunctuationId::LParen, "expected '(' after print")?;
        let value = self.expression()?;
        let close = self.expect_punct(PunctuationId::RParen, "expected ')' after print expression")?;

        let span = keyword.span.merge(close.span);
        Ok(Spanned::new(Statement::Print(PrintStmt { value }), span))
    }
}

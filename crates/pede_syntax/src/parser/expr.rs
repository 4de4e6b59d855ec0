/// Expression parsing methods.
///
/// Precedence ladder, loosest first: additive (`+`) → multiplicative (`*`) → primary.
/// Both binary levels are left-associative.
impl Parser {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.additive()
    }

    fn additive(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.multiplicative()?;
        while self.match_op(OperatorId::Plus)? {
            let right = self.multiplicative()?;
            left = binary(left, BinaryOp::Add, right);
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.primary()?;
        while self.match_op(OperatorId::Star)? {
            let right = self.primary()?;
            left = binary(left, BinaryOp::Mul, right);
        }
        Ok(left)
    }

    fn primary(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let expr = match self.peek().kind {
            TokenKind::Number => {
                let value = self
                    .peek()
                    .text
                    .parse::<f64>()
                    .map_err(|_| self.error_here(format!("invalid number literal '{}'", self.peek().text)))?;
                Expr::Number(value)
            }
            TokenKind::Ident => Expr::Variable(self.peek().text.clone()),
            TokenKind::String => Expr::String(self.peek().text.clone()),
            _ => return Err(self.error_here(format!("unexpected token {} in expression", self.peek()))),
        };
        let token = self.advance()?;
        Ok(Spanned::new(expr, token.span))
    }
}

fn binary(left: Spanned<Expr>, op: BinaryOp, right: Spanned<Expr>) -> Spanned<Expr> {
    let span = left.span.merge(right.span);
    Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span)
}

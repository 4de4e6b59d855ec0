/// Parser core type and entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module.
/// - The parser is fail-fast: the first lexical or syntax error ends the parse.
pub struct Parser {
    lexer: Lexer,
    /// The single lookahead token.
    current: Token,
    /// Source line the lookahead token starts on, captured when it was produced.
    current_line: String,
}

impl Parser {
    /// Create a parser and prime its lookahead from `lexer`.
    ///
    /// ## Errors
    /// Returns the lexer's error if the very first token cannot be produced.
    pub fn new(mut lexer: Lexer) -> Result<Self, CompileError> {
        let current = lexer.next_token()?;
        let current_line = lexer.current_token_line();
        Ok(Self {
            lexer,
            current,
            current_line,
        })
    }

    /// Parse the whole input into a [`Program`].
    ///
    /// Newlines between statements (and before the end of input) are skipped.
    pub fn parse(mut self) -> Result<Program, CompileError> {
        let mut statements = Vec::new();

        self.skip_newlines()?;
        while !self.is_at_end() {
            statements.push(self.statement()?);
            self.skip_newlines()?;
        }

        Ok(Program { statements })
    }
}

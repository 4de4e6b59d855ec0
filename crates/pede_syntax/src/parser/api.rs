/// Parse source text into an AST [`Program`].
///
/// This is the main public entrypoint for parsing; it drives a fresh [`Lexer`] on demand.
///
/// ## Errors
/// Returns the first lexical or syntax error encountered.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Program, CompileError> {
    let program = Parser::new(Lexer::new(source))?.parse()?;
    tracing::debug!(statements = program.statements.len(), "parsed program");
    Ok(program)
}

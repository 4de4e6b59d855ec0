#[cfg(test)]
/// Parser unit tests.
///
/// These cover operator precedence/associativity, statement shapes, and the exact location
/// reported for each syntax error.
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorKind, Position};

    fn parse_ok(source: &str) -> Program {
        parse(source).unwrap_or_else(|e| panic!("parse failed:\n{e}"))
    }

    fn single_value(source: &str) -> Expr {
        let program = parse_ok(source);
        match &program.statements[0].node {
            Statement::Assignment(assign) => assign.value.node.clone(),
            Statement::Print(print) => print.value.node.clone(),
        }
    }

    #[test]
    fn test_mul_binds_tighter_than_add() {
        let program = parse_ok("x = 2 + 3 * 4\n");
        assert_eq!(program.statements.len(), 1);
        let Statement::Assignment(assign) = &program.statements[0].node else {
            panic!("expected assignment");
        };
        assert_eq!(assign.name, "x");
        let Expr::Binary(left, BinaryOp::Add, right) = &assign.value.node else {
            panic!("expected addition at the root, got {}", assign.value.node);
        };
        assert_eq!(left.node, Expr::Number(2.0));
        let Expr::Binary(mul_left, BinaryOp::Mul, mul_right) = &right.node else {
            panic!("expected multiplication on the right");
        };
        assert_eq!(mul_left.node, Expr::Number(3.0));
        assert_eq!(mul_right.node, Expr::Number(4.0));
    }

    /// Fully parenthesized rendering, so tests can compare tree shapes as strings.
    fn shape(expr: &Expr) -> String {
        match expr {
            Expr::Binary(left, op, right) => format!("({} {op} {})", shape(&left.node), shape(&right.node)),
            other => other.to_string(),
        }
    }

    #[test]
    fn test_binary_operators_are_left_associative() {
        assert_eq!(shape(&single_value("x = 1 + 2 + 3")), "((1 + 2) + 3)");
        assert_eq!(shape(&single_value("x = 1 * 2 * 3")), "((1 * 2) * 3)");
        assert_eq!(shape(&single_value("x = 1 * 2 + 3 * 4")), "((1 * 2) + (3 * 4))");
    }

    #[test]
    fn test_display_reparses_to_the_same_tree() {
        let source = "a = 1 * 2 + 3 * 4 + 5\nprint(a * a * 2 + \"s\")\n";
        let program = parse_ok(source);
        assert_eq!(program.to_string(), source);
        let reparsed = parse_ok(&program.to_string());
        let shapes = |p: &Program| -> Vec<String> {
            p.statements
                .iter()
                .map(|s| match &s.node {
                    Statement::Assignment(assign) => shape(&assign.value.node),
                    Statement::Print(print) => shape(&print.value.node),
                })
                .collect()
        };
        assert_eq!(shapes(&reparsed), shapes(&program));
    }

    #[test]
    fn test_factors() {
        assert_eq!(single_value("print(name)"), Expr::Variable("name".to_string()));
        assert_eq!(single_value("print(\"hi there\")"), Expr::String("hi there".to_string()));
        assert_eq!(single_value("print(007)"), Expr::Number(7.0));
    }

    #[test]
    fn test_program_display() {
        let program = parse_ok("a = 1\nb = a * 2 + \"s\"\nprint(b)\n");
        insta::assert_snapshot!(program.to_string(), @r#"
        a = 1
        b = a * 2 + "s"
        print(b)
        "#);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let program = parse_ok("\n\nx = 1\n\n\nprint(x)\n\n");
        assert_eq!(program.statements.len(), 2);
        assert!(matches!(program.statements[1].node, Statement::Print(_)));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_ok("").statements.is_empty());
        assert!(parse_ok("\n\n").statements.is_empty());
    }

    #[test]
    fn test_statements_need_no_separator() {
        let program = parse_ok("x = 1 y = x");
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_rebinding_is_syntactically_fine() {
        let program = parse_ok("x = 1\nx = \"one\"\n");
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_statement_and_expression_spans() {
        let program = parse_ok("print(x)\ny = 10 + 2\n");
        assert_eq!(program.statements[0].span, Span::new(0, 8));
        assert_eq!(program.statements[1].span, Span::new(9, 19));
        let Statement::Assignment(assign) = &program.statements[1].node else {
            panic!("expected assignment");
        };
        assert_eq!(assign.name_span, Span::new(9, 10));
        assert_eq!(assign.value.span, Span::new(13, 19));
    }

    // ========================================================================
    // Errors
    // ========================================================================

    #[test]
    fn test_missing_equals_points_at_found_token() {
        let err = parse("x 5").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.message, "expected '=' after identifier");
        assert_eq!(err.position, Position::new(1, 3));
        let found = err.found.as_ref().expect("found token");
        assert_eq!(found.kind, TokenKind::Number);
        assert_eq!(found.text, "5");
        assert_eq!(err.to_string(), "expected '=' after identifier at Line 1, column 3:\nx 5\n  ^");
    }

    #[test]
    fn test_print_requires_parens() {
        let err = parse("print 5").unwrap_err();
        assert_eq!(err.message, "expected '(' after print");
        assert_eq!(err.position, Position::new(1, 7));

        let err = parse("print(5").unwrap_err();
        assert_eq!(err.message, "expected ')' after print expression");
        assert_eq!(err.found.map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_error_on_newline_token_uses_its_own_line() {
        let err = parse("x = 1\nprint(x\ny = 2\n").unwrap_err();
        assert_eq!(err.message, "expected ')' after print expression");
        assert_eq!(err.position, Position::new(2, 8));
        assert_eq!(err.line_source, "print(x");
    }

    #[test]
    fn test_unexpected_statement_start() {
        let err = parse("x = 1\n+ 2\n").unwrap_err();
        assert_eq!(err.message, "unexpected token '+' at start of statement");
        assert_eq!(err.position, Position::new(2, 1));

        let err = parse("42").unwrap_err();
        assert_eq!(err.message, "unexpected token number '42' at start of statement");
    }

    #[test]
    fn test_unexpected_token_in_expression() {
        let err = parse("x = )").unwrap_err();
        assert_eq!(err.message, "unexpected token ')' in expression");
        assert_eq!(err.position, Position::new(1, 5));

        let err = parse("x = 1 +\n").unwrap_err();
        assert_eq!(err.message, "unexpected token newline in expression");
        assert_eq!(err.line_source, "x = 1 +");

        let err = parse("x = print").unwrap_err();
        assert_eq!(err.message, "unexpected token 'print' in expression");
    }

    #[test]
    fn test_lexer_errors_surface_through_parse() {
        let err = parse("x = 1\ny = 2 / 1\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownCharacter('/'));
        assert_eq!(err.position, Position::new(2, 7));

        let err = parse("print(\"abc)\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
        assert_eq!(err.position, Position::new(1, 7));
    }

    #[test]
    fn test_first_token_lex_error_fails_construction() {
        let err = Parser::new(Lexer::new("#")).err().expect("construction should fail");
        assert_eq!(err.kind, ErrorKind::UnknownCharacter('#'));
    }
}

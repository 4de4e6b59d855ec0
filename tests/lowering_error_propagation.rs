use pede::Target;
use pede::ast;
use pede::backend::{AstLowering, Category, CodegenError};

fn span(start: usize, end: usize) -> ast::Span {
    ast::Span::new(start, end)
}

fn var(name: &str, at: usize) -> ast::Spanned<ast::Expr> {
    ast::Spanned::new(ast::Expr::Variable(name.into()), span(at, at + name.len()))
}

fn print(value: ast::Spanned<ast::Expr>) -> ast::Spanned<ast::Statement> {
    let s = value.span;
    ast::Spanned::new(ast::Statement::Print(ast::PrintStmt { value }), s)
}

fn lower(statements: Vec<ast::Spanned<ast::Statement>>) -> Result<pede::Module, CodegenError> {
    AstLowering::new(Target::from_os_arch("linux", "amd64")).lower_program(&ast::Program { statements })
}

#[test]
fn lowering_undeclared_variable_inside_binary_returns_error() {
    // print(1 + ghost), built by hand so the spans are arbitrary
    let sum = ast::Spanned::new(
        ast::Expr::Binary(
            Box::new(ast::Spanned::new(ast::Expr::Number(1.0), span(40, 41))),
            ast::BinaryOp::Add,
            Box::new(var("ghost", 44)),
        ),
        span(40, 49),
    );

    match lower(vec![print(sum)]) {
        Ok(_) => panic!("expected CodegenError, got Ok"),
        Err(CodegenError::UndeclaredVariable { name, span }) => {
            assert_eq!(name, "ghost");
            assert_eq!(span, ast::Span::new(44, 49));
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lowering_stops_at_the_first_error() {
    let text = ast::Spanned::new(ast::Expr::String("s".into()), span(0, 3));
    let product = ast::Spanned::new(
        ast::Expr::Binary(Box::new(text), ast::BinaryOp::Mul, Box::new(var("later", 6))),
        span(0, 11),
    );

    // `later` is undeclared too, but the operands are both evaluated before the category check
    let err = lower(vec![print(product), print(var("never", 20))]).unwrap_err();
    assert_eq!(
        err,
        CodegenError::UndeclaredVariable {
            name: "later".into(),
            span: span(6, 11),
        }
    );
}

#[test]
fn lowering_text_operands_reports_both_categories() {
    let text = || ast::Spanned::new(ast::Expr::String("a".into()), span(0, 3));
    let sum = ast::Spanned::new(
        ast::Expr::Binary(Box::new(text()), ast::BinaryOp::Add, Box::new(text())),
        span(0, 9),
    );

    let err = lower(vec![print(sum)]).unwrap_err();
    assert_eq!(
        err,
        CodegenError::UnsupportedOperands {
            op: ast::BinaryOp::Add,
            left: Category::Text,
            right: Category::Text,
            span: span(0, 9),
        }
    );
    assert_eq!(err.span(), span(0, 9));
}

//! Integration tests for the pede compiler pipeline

use std::fs;
use std::path::Path;

use pede::CompileFailure;
use pede::backend::CodegenError;
use pede::backend::toolchain::{BuildError, compile_file};
use pede::diagnostics::ErrorKind;
use pede::frontend::preprocessor::PreprocessConfig;
use pede::{Module, Target};

fn linux() -> Target {
    Target::from_os_arch("linux", "amd64")
}

/// Helper to run full pipeline on a source file
fn compile_fixture(path: &Path) -> Result<Module, CompileFailure> {
    match compile_file(path, &linux(), &PreprocessConfig::default()) {
        Ok((_, module)) => Ok(module),
        Err(BuildError::Compile { failure, .. }) => Err(failure),
        Err(other) => panic!("unexpected build error for {}: {other}", path.display()),
    }
}

fn fixtures(dir: &str) -> Vec<std::path::PathBuf> {
    let mut paths: Vec<_> = fs::read_dir(Path::new("tests/fixtures").join(dir))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "pede").unwrap_or(false))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures in {dir}");
    paths
}

/// Test that all valid fixtures compile successfully
#[test]
fn test_valid_fixtures() {
    for path in fixtures("valid") {
        let result = compile_fixture(&path);
        assert!(
            result.is_ok(),
            "Expected {} to compile successfully, got error: {}",
            path.display(),
            result.unwrap_err()
        );
        let ir = result.unwrap().to_string();
        assert!(ir.contains("define void @main()"), "{}", path.display());
        assert!(ir.contains("  ret void\n}"), "{}", path.display());
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    for path in fixtures("invalid") {
        let result = compile_fixture(&path);
        assert!(
            result.is_err(),
            "Expected {} to fail compilation, but it succeeded",
            path.display()
        );
    }
}

#[test]
fn test_invalid_fixture_diagnostics() {
    let cases: &[(&str, &str)] = &[
        ("decimal", "unknown character '.' at Line 1, column 6:\nx = 1.5\n     ^"),
        ("minus", "unknown character '-' at Line 1, column 7:\nx = 5 -\n      ^"),
        ("missing_paren", "expected '(' after print at Line 1, column 7:\nprint 5\n      ^"),
        ("unterminated", "unterminated string at Line 1, column 5:\nx = \"open\n    ^"),
    ];
    for (name, expected) in cases {
        let path = Path::new("tests/fixtures/invalid").join(format!("{name}.pede"));
        match compile_fixture(&path) {
            Err(CompileFailure::Syntax(err)) => assert_eq!(&err.to_string(), expected, "{name}"),
            other => panic!("{name}: expected a syntax error, got {other:?}"),
        }
    }
}

#[test]
fn test_semantic_fixture_diagnostics() {
    let path = Path::new("tests/fixtures/invalid/undeclared.pede");
    match compile_fixture(path) {
        Err(CompileFailure::Codegen(CodegenError::UndeclaredVariable { name, span })) => {
            assert_eq!(name, "y");
            assert_eq!((span.start, span.end), (6, 7));
        }
        other => panic!("expected an undeclared variable, got {other:?}"),
    }

    let path = Path::new("tests/fixtures/invalid/text_arithmetic.pede");
    let err = compile_fixture(path).unwrap_err();
    assert_eq!(err.to_string(), "unsupported operands for '+': Text + Numeric");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = compile_file(
        Path::new("tests/fixtures/missing.pede"),
        &linux(),
        &PreprocessConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Io { .. }));
    assert!(err.to_string().starts_with("cannot access 'tests/fixtures/missing.pede'"));
}

#[test]
fn test_compile_error_diagnostic_codes() {
    use miette::Diagnostic;

    let err = pede::compile("x = \"oops\n", "linux", "amd64").unwrap_err();
    assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("pede::lex::unterminated_string"));

    let err = pede::compile("print(q)\n", "linux", "amd64").unwrap_err();
    assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("pede::codegen::undeclared_variable"));
    let labels: Vec<_> = err.labels().into_iter().flatten().collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 6);
}

/// Test specific lexer behavior
mod lexer_tests {
    use pede::lexer::{TokenKind, lex};

    #[test]
    fn test_print_is_the_only_keyword() {
        let tokens = lex("print prints Print").unwrap();
        assert!(matches!(tokens[0].kind, TokenKind::Keyword(_)));
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_error_kinds_surface_through_the_facade() {
        let err = lex("x = $").unwrap_err();
        assert_eq!(err.kind, super::ErrorKind::UnknownCharacter('$'));
    }
}

//! Abstract syntax tree for pede programs.
//!
//! A program is a flat list of statements, and expressions are a binary tree over
//! variables and literals. Every statement and expression node carries the byte span it was parsed from so later
//! stages can point diagnostics back at the source.

use std::fmt;

use pede_core::lang::operators::{self, OperatorId};

/// Byte range into the (preprocessed) source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A whole source file: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(AssignmentStmt),
    Print(PrintStmt),
}

/// `name = value`
///
/// Rebinding an existing name is allowed; the most recent binding wins.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub name: Ident,
    pub name_span: Span,
    pub value: Spanned<Expr>,
}

/// `print(value)`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub value: Spanned<Expr>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a previously assigned name.
    Variable(Ident),
    /// Decimal literal. Only unsigned digit runs are produced by the lexer.
    Number(f64),
    /// String literal contents, without the surrounding quotes and with no escape processing.
    String(String),
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Mul,
}

impl BinaryOp {
    /// Binding strength from the operator registry; a larger value binds tighter.
    pub fn precedence(self) -> u8 {
        operators::info_for(self.into()).precedence
    }

    pub fn symbol(self) -> &'static str {
        operators::as_str(self.into())
    }
}

impl From<BinaryOp> for OperatorId {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Mul => OperatorId::Star,
        }
    }
}

impl TryFrom<OperatorId> for BinaryOp {
    type Error = OperatorId;

    /// Only infix operators have a `BinaryOp`; `=` is a binding form and is handed back unchanged.
    fn try_from(id: OperatorId) -> Result<Self, Self::Error> {
        match id {
            OperatorId::Plus => Ok(BinaryOp::Add),
            OperatorId::Star => Ok(BinaryOp::Mul),
            OperatorId::Eq => Err(id),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Pretty printing
// ============================================================================

/// Renders expressions as source text.
///
/// Parser-built trees print without parentheses and re-parse to the same tree. A hand-built tree the grammar
/// cannot spell (a looser operator under a tighter one, or a same-precedence chain nested on the right) gets
/// grouping parentheses, which are for reading only.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable(name) => f.write_str(name),
            Expr::Number(n) => write!(f, "{n}"),
            Expr::String(s) => write!(f, "\"{s}\""),
            Expr::Binary(left, op, right) => {
                write_operand(f, &left.node, *op, false)?;
                write!(f, " {op} ")?;
                write_operand(f, &right.node, *op, true)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Expr, parent: BinaryOp, on_right: bool) -> fmt::Result {
    let grouped = match operand {
        Expr::Binary(_, op, _) => {
            op.precedence() < parent.precedence() || (on_right && op.precedence() == parent.precedence())
        }
        _ => false,
    };
    if grouped {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assignment(assign) => write!(f, "{} = {}", assign.name, assign.value.node),
            Statement::Print(print) => write!(f, "print({})", print.value.node),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{}", stmt.node)?;
        }
        Ok(())
    }
}

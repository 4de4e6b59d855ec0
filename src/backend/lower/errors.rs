//! Error types for AST to IR lowering.
//!
//! Every construct the generator cannot express is reported here instead of panicking. Lowering stops at the first
//! error and no module is produced.

use pede_syntax::ast::{BinaryOp, Span};

use super::Category;

#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum CodegenError {
    /// A variable was read before any assignment to it.
    #[error("undeclared variable '{name}'")]
    #[diagnostic(
        code(pede::codegen::undeclared_variable),
        help("variables must be assigned before they are used")
    )]
    UndeclaredVariable {
        name: String,
        #[label("used here before any assignment")]
        span: Span,
    },

    /// `+` / `*` applied to a non-numeric operand.
    #[error("unsupported operands for '{op}': {left} {op} {right}")]
    #[diagnostic(
        code(pede::codegen::unsupported_operands),
        help("'+' and '*' only combine numbers; strings cannot be added or multiplied")
    )]
    UnsupportedOperands {
        op: BinaryOp,
        left: Category,
        right: Category,
        #[label("this operation")]
        span: Span,
    },
}

impl CodegenError {
    pub fn span(&self) -> Span {
        match self {
            CodegenError::UndeclaredVariable { span, .. } | CodegenError::UnsupportedOperands { span, .. } => *span,
        }
    }
}

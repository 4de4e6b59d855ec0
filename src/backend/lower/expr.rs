//! Expression lowering.

use pede_syntax::ast::{BinaryOp, Expr, Span, Spanned};

use super::{AstLowering, Category, CodegenError, TypedValue};
use crate::backend::ir::{Instruction, IrType, Value};

impl AstLowering {
    pub(super) fn lower_expr(&mut self, expr: &Spanned<Expr>) -> Result<TypedValue, CodegenError> {
        match &expr.node {
            Expr::Number(n) => Ok(TypedValue::numeric(Value::ConstFloat(*n))),
            Expr::String(text) => Ok(TypedValue::text(self.string_literal(text))),
            Expr::Variable(name) => self.load_variable(name, expr.span),
            Expr::Binary(left, op, right) => self.lower_binary(left, *op, right, expr.span),
        }
    }

    fn load_variable(&mut self, name: &str, span: Span) -> Result<TypedValue, CodegenError> {
        let slot = self
            .symbols
            .get(name)
            .cloned()
            .ok_or_else(|| CodegenError::UndeclaredVariable {
                name: name.to_string(),
                span,
            })?;

        let result = self.fresh_local(slot.category.storage_type());
        self.emit(Instruction::Load {
            result: result.clone(),
            ptr: slot.pointer,
        });
        Ok(TypedValue {
            value: result,
            category: slot.category,
        })
    }

    /// `+` and `*` are floating-point only; any `Text` operand is an error.
    fn lower_binary(
        &mut self,
        left: &Spanned<Expr>,
        op: BinaryOp,
        right: &Spanned<Expr>,
        span: Span,
    ) -> Result<TypedValue, CodegenError> {
        let lhs = self.lower_expr(left)?;
        let rhs = self.lower_expr(right)?;

        if lhs.category != Category::Numeric || rhs.category != Category::Numeric {
            return Err(CodegenError::UnsupportedOperands {
                op,
                left: lhs.category,
                right: rhs.category,
                span,
            });
        }

        let result = self.fresh_local(IrType::Double);
        let (lhs, rhs) = (lhs.value, rhs.value);
        self.emit(match op {
            BinaryOp::Add => Instruction::FAdd {
                result: result.clone(),
                lhs,
                rhs,
            },
            BinaryOp::Mul => Instruction::FMul {
                result: result.clone(),
                lhs,
                rhs,
            },
        });
        Ok(TypedValue::numeric(result))
    }
}

//! Statement lowering.

use pede_syntax::ast::{AssignmentStmt, PrintStmt, Spanned, Statement};

use super::{AstLowering, CodegenError, Slot};
use crate::backend::ir::{Instruction, IrType};

impl AstLowering {
    pub(super) fn lower_statement(&mut self, stmt: &Spanned<Statement>) -> Result<(), CodegenError> {
        match &stmt.node {
            Statement::Assignment(assign) => self.lower_assignment(assign),
            Statement::Print(print) => self.lower_print(print),
        }
    }

    /// Evaluate, store into a fresh slot, and (re)bind the name to that slot.
    ///
    /// A rebinding never reuses the previous slot, so a name may change category.
    fn lower_assignment(&mut self, assign: &AssignmentStmt) -> Result<(), CodegenError> {
        let value = self.lower_expr(&assign.value)?;
        let storage = value.category.storage_type();

        let pointer = self.fresh_local(IrType::ptr_to(storage.clone()));
        self.emit(Instruction::Alloca {
            result: pointer.clone(),
            allocated: storage,
        });
        self.emit(Instruction::Store {
            value: value.value,
            ptr: pointer.clone(),
        });

        tracing::trace!(name = %assign.name, category = %value.category, "bound variable");
        self.symbols.insert(
            assign.name.clone(),
            Slot {
                pointer,
                category: value.category,
            },
        );
        Ok(())
    }

    fn lower_print(&mut self, print: &PrintStmt) -> Result<(), CodegenError> {
        let printf = self.declare_printf();
        let value = self.lower_expr(&print.value)?;
        let format = self.format_string(value.category);

        let result = self.fresh_local(printf.return_type.clone());
        self.emit(Instruction::Call {
            result: Some(result),
            callee: super::runtime::PRINTF.to_string(),
            signature: printf,
            args: vec![format, value.value],
        });
        Ok(())
    }
}

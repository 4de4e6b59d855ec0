//! Runtime support symbols: `printf` and the constant strings it is fed.
//!
//! Each of these is created lazily, the first time a statement needs it, and at most once per module.

use super::{AstLowering, Category};
use crate::backend::ir::{Function, FunctionType, Global, Instruction, IrType, Value};

pub(super) const PRINTF: &str = "printf";

/// Prefix of string-literal globals; the suffix is the literal's creation index in lowercase hex.
const STRING_GLOBAL_PREFIX: &str = ".str.";

impl AstLowering {
    /// Declare `i32 @printf(i8*, ...)` on first use and return its signature.
    pub(super) fn declare_printf(&mut self) -> FunctionType {
        if let Some(existing) = self.declarations.iter().find(|f| f.name == PRINTF) {
            return existing.signature();
        }
        let printf = Function::new(PRINTF, IrType::I32, vec![IrType::i8_ptr()], true);
        let signature = printf.signature();
        self.declarations.push(printf);
        signature
    }

    /// Pointer to the first byte of the constant holding `text`, creating the constant if needed.
    pub(super) fn string_literal(&mut self, text: &str) -> Value {
        let index = match self.string_globals.get(text) {
            Some(&index) => index,
            None => {
                let name = format!("{STRING_GLOBAL_PREFIX}{:x}", self.string_globals.len());
                let index = self.add_global(Global::c_string(name, text));
                self.string_globals.insert(text.to_string(), index);
                index
            }
        };
        self.first_byte(index)
    }

    /// Pointer to the `printf` template for `category`, creating the constant if needed.
    pub(super) fn format_string(&mut self, category: Category) -> Value {
        let index = match self.format_globals.get(&category) {
            Some(&index) => index,
            None => {
                let global = Global::c_string(category.format_global_name(), category.format_spec());
                let index = self.add_global(global);
                self.format_globals.insert(category, index);
                index
            }
        };
        self.first_byte(index)
    }

    fn add_global(&mut self, global: Global) -> usize {
        tracing::trace!(name = %global.name, "created global");
        self.globals.push(global);
        self.globals.len() - 1
    }

    /// `getelementptr [N x i8], [N x i8]* @g, i32 0, i32 0`
    fn first_byte(&mut self, index: usize) -> Value {
        let global = &self.globals[index];
        let (ptr, source_ty) = (global.as_value(), global.value_type());

        let result = self.fresh_local(IrType::i8_ptr());
        self.emit(Instruction::GetElementPtr {
            result: result.clone(),
            source_ty,
            ptr,
            indices: vec![Value::ConstInt(0), Value::ConstInt(0)],
        });
        result
    }
}

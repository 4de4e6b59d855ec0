//! IR code generator facade.
//!
//! [`IrCodegen`] is the one entrypoint callers need: give it a target once, then turn parsed programs into IR modules
//! (or directly into LLVM assembly text).
//!
//! ## Examples
//!
//! ```rust
//! use pede::backend::{IrCodegen, Target};
//!
//! let program = pede_syntax::parser::parse("x = 2\nprint(x * 3)\n").unwrap();
//! let codegen = IrCodegen::new(Target::from_os_arch("linux", "arm64"));
//! let ir = codegen.generate_text(&program).unwrap();
//! assert!(ir.starts_with("target triple = \"aarch64-linux-gnu\""));
//! ```

use pede_syntax::ast::Program;

use super::ir::Module;
use super::lower::{AstLowering, CodegenError};
use super::target::Target;

#[derive(Debug, Clone, Default)]
pub struct IrCodegen {
    target: Target,
}

impl IrCodegen {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Lower `program` into a fresh module.
    ///
    /// ## Errors
    ///
    /// Returns the first [`CodegenError`] (undeclared variable, non-numeric operands).
    #[tracing::instrument(skip_all, fields(target = %self.target, statements = program.statements.len()))]
    pub fn generate(&self, program: &Program) -> Result<Module, CodegenError> {
        AstLowering::new(self.target.clone()).lower_program(program)
    }

    /// Like [`IrCodegen::generate`], serialized to LLVM assembly.
    pub fn generate_text(&self, program: &Program) -> Result<String, CodegenError> {
        Ok(self.generate(program)?.to_string())
    }
}

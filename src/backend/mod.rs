//! pede compiler backend
//!
//! Turns a parsed program into LLVM IR and, for full builds, hands that IR to a C toolchain.
//!
//! The pipeline is:
//! 1. AST from the frontend → [`lower::AstLowering`] → [`ir::Module`]
//! 2. [`ir::Module`] → LLVM assembly text (`.ll`)
//! 3. `clang file.ll -o output` via [`toolchain::build`]
//!
//! ## Module Organization
//!
//! - `ir/` - in-memory IR model and its textual printer
//! - `lower/` - AST → IR lowering, runtime categories, [`CodegenError`]
//! - `target.rs` - os/arch → target triple table
//! - `codegen.rs` - [`IrCodegen`] facade
//! - `toolchain.rs` - file-level build driver (preprocess, compile, write IR, link)

pub mod codegen;
pub mod ir;
pub mod lower;
pub mod target;
pub mod toolchain;

pub use codegen::IrCodegen;
pub use lower::{AstLowering, Category, CodegenError, TypedValue};
pub use target::Target;

use pede_syntax::ast::Program;

/// Generate an IR module for `program` targeting `target`.
///
/// Shorthand for `IrCodegen::new(target.clone()).generate(program)`.
pub fn generate(program: &Program, target: &Target) -> Result<ir::Module, CodegenError> {
    IrCodegen::new(target.clone()).generate(program)
}

//! In-memory LLVM IR
//!
//! A deliberately small model of LLVM assembly: one module holding constant globals and functions, functions holding
//! labelled blocks, blocks holding a closed set of instructions over typed values. The code generator builds it;
//! [`Module::serialize`] (or `Display`) turns it into the `.ll` text handed to clang.
//!
//! ```text
//! Program (AST) → lower → Module → printer → LLVM assembly
//! ```

pub mod instructions;
pub mod module;
pub mod printer;
pub mod types;
pub mod values;

pub use instructions::Instruction;
pub use module::{Block, Constant, Function, Global, Module};
pub use types::{FunctionType, IrType};
pub use values::Value;

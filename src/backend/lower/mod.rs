//! AST to IR lowering pass.
//!
//! Walks a [`Program`] once, top to bottom, and emits every statement into the `entry` block of a single
//! `define void @main()`. The language is dynamically typed, so each emitted value is paired with its runtime
//! [`Category`], which picks storage (`double` vs `i8*`), the `printf` format, and which operators are legal.
//!
//! ## Module structure
//!
//! - `errors` - [`CodegenError`]
//! - `stmt` - assignment and print lowering
//! - `expr` - expression lowering
//! - `runtime` - `printf`, format strings and string-literal constants (each created once, on first use)

mod errors;
mod expr;
mod runtime;
mod stmt;

use std::collections::HashMap;
use std::fmt;

use pede_syntax::ast::Program;

use super::ir::{Function, Global, Instruction, IrType, Module, Value};
use super::target::Target;

pub use errors::CodegenError;

/// Runtime kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Numeric,
    Text,
}

impl Category {
    /// Type a value of this category is stored and passed as.
    pub fn storage_type(self) -> IrType {
        match self {
            Category::Numeric => IrType::Double,
            Category::Text => IrType::i8_ptr(),
        }
    }

    /// `printf` template used by `print`.
    pub fn format_spec(self) -> &'static str {
        match self {
            Category::Numeric => "%f\n",
            Category::Text => "%s\n",
        }
    }

    pub fn format_global_name(self) -> &'static str {
        match self {
            Category::Numeric => ".fmtstr",
            Category::Text => ".fmtstr_s",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Numeric => write!(f, "Numeric"),
            Category::Text => write!(f, "Text"),
        }
    }
}

/// An emitted operand together with its category.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub category: Category,
}

impl TypedValue {
    pub fn numeric(value: Value) -> Self {
        Self {
            value,
            category: Category::Numeric,
        }
    }

    pub fn text(value: Value) -> Self {
        Self {
            value,
            category: Category::Text,
        }
    }
}

/// Stack slot bound to a variable name.
#[derive(Debug, Clone)]
struct Slot {
    pointer: Value,
    category: Category,
}

/// AST to IR lowering context.
///
/// Owns everything one compilation produces: the `main` function under construction, the constant globals, external
/// declarations, the flat symbol table, and the caches that keep constants unique.
///
/// # Examples
///
/// ```rust
/// use pede::backend::lower::AstLowering;
/// use pede::backend::target::Target;
///
/// let program = pede_syntax::parser::parse("print(1 + 2)\n").unwrap();
/// let module = AstLowering::new(Target::from_os_arch("linux", "amd64"))
///     .lower_program(&program)
///     .unwrap();
/// assert!(module.to_string().contains("fadd double 1.0, 2.0"));
/// ```
pub struct AstLowering {
    target: Target,
    main: Function,
    /// Block of `main` that receives new instructions.
    insert_block: usize,
    globals: Vec<Global>,
    declarations: Vec<Function>,
    symbols: HashMap<String, Slot>,
    /// Format-string globals by category, as indices into `globals`.
    format_globals: HashMap<Category, usize>,
    /// String-literal globals by content, as indices into `globals`.
    string_globals: HashMap<String, usize>,
}

impl AstLowering {
    pub fn new(target: Target) -> Self {
        let mut main = Function::new("main", IrType::Void, Vec::new(), false);
        let insert_block = main.append_block("entry");
        Self {
            target,
            main,
            insert_block,
            globals: Vec::new(),
            declarations: Vec::new(),
            symbols: HashMap::new(),
            format_globals: HashMap::new(),
            string_globals: HashMap::new(),
        }
    }

    /// Lower a complete program to an IR module.
    ///
    /// # Errors
    ///
    /// Returns the first [`CodegenError`]; nothing is emitted for the rest of the program.
    pub fn lower_program(mut self, program: &Program) -> Result<Module, CodegenError> {
        for stmt in &program.statements {
            self.lower_statement(stmt)?;
        }
        Ok(self.finish())
    }

    /// Terminate `main` and assemble the module: `main` first, then declarations in the order they were needed.
    fn finish(mut self) -> Module {
        self.emit(Instruction::Ret { value: None });
        tracing::debug!(
            globals = self.globals.len(),
            declarations = self.declarations.len(),
            "lowered program"
        );

        let mut functions = Vec::with_capacity(1 + self.declarations.len());
        functions.push(self.main);
        functions.extend(self.declarations);
        Module {
            target_triple: self.target.triple().to_string(),
            globals: self.globals,
            functions,
        }
    }

    // ========================================================================
    // Emission helpers
    // ========================================================================

    fn emit(&mut self, instruction: Instruction) {
        self.main.blocks[self.insert_block].push(instruction);
    }

    fn fresh_local(&mut self, ty: IrType) -> Value {
        self.main.fresh_local(ty)
    }
}

//! Module, global, function and block containers.

use super::instructions::Instruction;
use super::types::{FunctionType, IrType};
use super::values::Value;

/// A whole translation unit.
///
/// ## Notes
/// - Globals and functions print in insertion order; nothing is sorted, so output order is creation order.
/// - An empty `target_triple` means "let the backend pick the host".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub target_triple: String,
    pub globals: Vec<Global>,
    pub functions: Vec<Function>,
}

impl Module {
    pub fn new(target_triple: impl Into<String>) -> Self {
        Self {
            target_triple: target_triple.into(),
            ..Self::default()
        }
    }

    pub fn global(&self, name: &str) -> Option<&Global> {
        self.globals.iter().find(|g| g.name == name)
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    /// Raw bytes of a `[N x i8]` array, terminator included.
    CharArray(Vec<u8>),
}

impl Constant {
    pub fn ty(&self) -> IrType {
        match self {
            Constant::CharArray(bytes) => IrType::char_array(bytes.len()),
        }
    }
}

/// `@name = private unnamed_addr constant <init>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Global {
    pub name: String,
    pub init: Constant,
}

impl Global {
    /// NUL-terminated C string constant.
    pub fn c_string(name: impl Into<String>, text: &str) -> Self {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        Self {
            name: name.into(),
            init: Constant::CharArray(bytes),
        }
    }

    pub fn value_type(&self) -> IrType {
        self.init.ty()
    }

    /// The global as an operand, i.e. a pointer to its value.
    pub fn as_value(&self) -> Value {
        Value::Global(self.name.clone(), IrType::ptr_to(self.value_type()))
    }
}

/// A function definition, or a declaration when it has no blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub return_type: IrType,
    pub params: Vec<IrType>,
    pub variadic: bool,
    pub blocks: Vec<Block>,
    next_local: u32,
}

impl Function {
    pub fn new(name: impl Into<String>, return_type: IrType, params: Vec<IrType>, variadic: bool) -> Self {
        Self {
            name: name.into(),
            return_type,
            params,
            variadic,
            blocks: Vec::new(),
            next_local: 0,
        }
    }

    pub fn is_declaration(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn signature(&self) -> FunctionType {
        FunctionType {
            return_type: self.return_type.clone(),
            params: self.params.clone(),
            variadic: self.variadic,
        }
    }

    /// Append a block and return its index.
    pub fn append_block(&mut self, label: impl Into<String>) -> usize {
        self.blocks.push(Block::new(label));
        self.blocks.len() - 1
    }

    /// Allocate the next unnamed local (`%0`, `%1`, ...).
    pub fn fresh_local(&mut self, ty: IrType) -> Value {
        let id = self.next_local;
        self.next_local += 1;
        Value::Local(id, ty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub label: String,
    pub instructions: Vec<Instruction>,
}

impl Block {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instructions: Vec::new(),
        }
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn is_terminated(&self) -> bool {
        self.instructions.last().is_some_and(Instruction::is_terminator)
    }
}

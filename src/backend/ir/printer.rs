//! Textual LLVM assembly output.
//!
//! Layout: optional `target triple` line, the globals, then the functions, with one blank line between sections and
//! between functions. Instructions are indented by two spaces under their block label.

use std::fmt;
use std::io;

use super::module::{Constant, Function, Global, Module};
use super::types::write_param_list;
use super::values::{EscapedBytes, Symbol};

impl Module {
    /// Write the module as LLVM assembly.
    ///
    /// The output is a pure function of the module: identical modules serialize to identical bytes.
    pub fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut needs_separator = false;

        if !self.target_triple.is_empty() {
            writeln!(f, "target triple = \"{}\"", EscapedBytes(self.target_triple.as_bytes()))?;
            needs_separator = true;
        }

        if !self.globals.is_empty() {
            if needs_separator {
                writeln!(f)?;
            }
            for global in &self.globals {
                writeln!(f, "{global}")?;
            }
            needs_separator = true;
        }

        for function in &self.functions {
            if needs_separator {
                writeln!(f)?;
            }
            write!(f, "{function}")?;
            needs_separator = true;
        }

        Ok(())
    }
}

impl fmt::Display for Global {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@{} = private unnamed_addr constant {} {}",
            Symbol(&self.name),
            self.value_type(),
            self.init
        )
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::CharArray(bytes) => write!(f, "c\"{}\"", EscapedBytes(bytes)),
        }
    }
}

/// Declarations print on one line; definitions print their blocks and end with `}`.
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = if self.is_declaration() { "declare" } else { "define" };
        write!(f, "{keyword} {} @{}(", self.return_type, Symbol(&self.name))?;
        write_param_list(f, &self.params, self.variadic)?;
        write!(f, ")")?;

        if self.is_declaration() {
            return writeln!(f);
        }

        writeln!(f, " {{")?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}:", block.label)?;
            for instruction in &block.instructions {
                writeln!(f, "  {instruction}")?;
            }
        }
        writeln!(f, "}}")
    }
}

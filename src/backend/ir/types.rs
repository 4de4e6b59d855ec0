//! IR type definitions
//!
//! These are LLVM first-class types in their textual spelling. Pointers are typed (`i8*`, `double*`), matching the
//! assembly dialect the generated modules are written in.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IrType {
    Void,
    I8,
    I32,
    Double,
    Ptr(Box<IrType>),
    /// `[len x inner]`
    Array(usize, Box<IrType>),
}

impl IrType {
    pub fn ptr_to(inner: IrType) -> Self {
        IrType::Ptr(Box::new(inner))
    }

    /// `i8*`, the C string type.
    pub fn i8_ptr() -> Self {
        Self::ptr_to(IrType::I8)
    }

    /// `[len x i8]`
    pub fn char_array(len: usize) -> Self {
        IrType::Array(len, Box::new(IrType::I8))
    }

    /// Type a pointer of this type points at, if it is a pointer.
    pub fn pointee(&self) -> Option<&IrType> {
        match self {
            IrType::Ptr(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrType::Void => write!(f, "void"),
            IrType::I8 => write!(f, "i8"),
            IrType::I32 => write!(f, "i32"),
            IrType::Double => write!(f, "double"),
            IrType::Ptr(inner) => write!(f, "{inner}*"),
            IrType::Array(len, inner) => write!(f, "[{len} x {inner}]"),
        }
    }
}

/// Signature of a callable, e.g. `i32 (i8*, ...)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub return_type: IrType,
    pub params: Vec<IrType>,
    pub variadic: bool,
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.return_type)?;
        write_param_list(f, &self.params, self.variadic)?;
        write!(f, ")")
    }
}

/// Comma-separated parameter types with an optional trailing `...`.
pub(super) fn write_param_list(f: &mut fmt::Formatter<'_>, params: &[IrType], variadic: bool) -> fmt::Result {
    for (i, ty) in params.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{ty}")?;
    }
    if variadic {
        if !params.is_empty() {
            write!(f, ", ")?;
        }
        write!(f, "...")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_types_render_like_llvm() {
        assert_eq!(IrType::i8_ptr().to_string(), "i8*");
        assert_eq!(IrType::char_array(4).to_string(), "[4 x i8]");
        assert_eq!(IrType::ptr_to(IrType::char_array(4)).to_string(), "[4 x i8]*");
        assert_eq!(IrType::ptr_to(IrType::Double).pointee(), Some(&IrType::Double));
    }

    #[test]
    fn variadic_signature() {
        let printf = FunctionType {
            return_type: IrType::I32,
            params: vec![IrType::i8_ptr()],
            variadic: true,
        };
        assert_eq!(printf.to_string(), "i32 (i8*, ...)");

        let main = FunctionType {
            return_type: IrType::Void,
            params: vec![],
            variadic: false,
        };
        assert_eq!(main.to_string(), "void ()");
    }
}

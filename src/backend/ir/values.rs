//! Operands: locals, globals and constants, each with its IR type.

use std::fmt;

use super::types::IrType;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unnamed local `%N`.
    Local(u32, IrType),
    /// `@name`; the type is the pointer type of the global.
    Global(String, IrType),
    ConstFloat(f64),
    ConstInt(i32),
}

impl Value {
    pub fn ty(&self) -> IrType {
        match self {
            Value::Local(_, ty) | Value::Global(_, ty) => ty.clone(),
            Value::ConstFloat(_) => IrType::Double,
            Value::ConstInt(_) => IrType::I32,
        }
    }

    /// `<type> <operand>`, the form used for instruction arguments.
    pub fn typed(&self) -> TypedOperand<'_> {
        TypedOperand(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Local(id, _) => write!(f, "%{id}"),
            Value::Global(name, _) => write!(f, "@{}", Symbol(name)),
            Value::ConstFloat(v) => write!(f, "{}", FloatLiteral(*v)),
            Value::ConstInt(v) => write!(f, "{v}"),
        }
    }
}

pub struct TypedOperand<'a>(&'a Value);

impl fmt::Display for TypedOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.ty(), self.0)
    }
}

/// Global/function name, quoted only when it is not a plain LLVM identifier.
pub(super) struct Symbol<'a>(pub(super) &'a str);

impl fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_plain_identifier(self.0) {
            f.write_str(self.0)
        } else {
            write!(f, "\"{}\"", EscapedBytes(self.0.as_bytes()))
        }
    }
}

/// `[-a-zA-Z$._][-a-zA-Z$._0-9]*`
fn is_plain_identifier(name: &str) -> bool {
    let is_start = |b: u8| b.is_ascii_alphabetic() || matches!(b, b'-' | b'$' | b'.' | b'_');
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if is_start(first) => bytes.all(|b| is_start(b) || b.is_ascii_digit()),
        _ => false,
    }
}

/// Bytes as they appear inside `c"..."`: printable ASCII verbatim, everything else plus `"` and `\` as `\XX`.
pub(super) struct EscapedBytes<'a>(pub(super) &'a [u8]);

impl fmt::Display for EscapedBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            if (0x20..=0x7e).contains(&b) && b != b'"' && b != b'\\' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\{b:02X}")?;
            }
        }
        Ok(())
    }
}

/// Double constant: exact decimal for finite integral values, otherwise the IEEE-754 bits in hex.
struct FloatLiteral(f64);

impl fmt::Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "0x{:016X}", v.to_bits())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_constants() {
        assert_eq!(Value::ConstFloat(5.0).to_string(), "5.0");
        assert_eq!(Value::ConstFloat(0.0).to_string(), "0.0");
        assert_eq!(Value::ConstFloat(1e20).to_string(), "100000000000000000000.0");
        assert_eq!(Value::ConstFloat(0.5).to_string(), "0x3FE0000000000000");
        assert_eq!(Value::ConstFloat(f64::INFINITY).to_string(), "0x7FF0000000000000");
    }

    #[test]
    fn typed_operands() {
        let local = Value::Local(3, IrType::i8_ptr());
        assert_eq!(local.typed().to_string(), "i8* %3");
        assert_eq!(Value::ConstInt(0).typed().to_string(), "i32 0");
        let global = Value::Global(".fmtstr".into(), IrType::ptr_to(IrType::char_array(4)));
        assert_eq!(global.typed().to_string(), "[4 x i8]* @.fmtstr");
    }

    #[test]
    fn symbols_are_quoted_only_when_needed() {
        assert_eq!(Symbol(".str.a").to_string(), ".str.a");
        assert_eq!(Symbol("main").to_string(), "main");
        assert_eq!(Symbol("1abc").to_string(), "\"1abc\"");
        assert_eq!(Symbol("has space").to_string(), "\"has space\"");
    }

    #[test]
    fn escaping() {
        assert_eq!(EscapedBytes(b"%f\n\0").to_string(), "%f\\0A\\00");
        assert_eq!(EscapedBytes(b"say \"hi\" \\o/").to_string(), "say \\22hi\\22 \\5Co/");
        assert_eq!(EscapedBytes("é".as_bytes()).to_string(), "\\C3\\A9");
    }
}

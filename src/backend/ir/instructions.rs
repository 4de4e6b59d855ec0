//! Instruction set.
//!
//! Only the instructions the code generator needs exist. Value-producing instructions carry their result local, so a
//! block can be printed without any renumbering pass.

use std::fmt;

use super::types::{FunctionType, IrType};
use super::values::{Symbol, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// `%r = alloca <allocated>`; `result` has type `<allocated>*`.
    Alloca { result: Value, allocated: IrType },
    Store { value: Value, ptr: Value },
    /// `%r = load <ty>, <ty>* %p`; the loaded type is `result`'s type.
    Load { result: Value, ptr: Value },
    FAdd { result: Value, lhs: Value, rhs: Value },
    FMul { result: Value, lhs: Value, rhs: Value },
    /// `%r = getelementptr <source_ty>, <source_ty>* %p, <indices>`
    GetElementPtr {
        result: Value,
        source_ty: IrType,
        ptr: Value,
        indices: Vec<Value>,
    },
    /// `result` is `None` for calls returning `void`.
    Call {
        result: Option<Value>,
        callee: String,
        signature: FunctionType,
        args: Vec<Value>,
    },
    Ret { value: Option<Value> },
}

impl Instruction {
    pub fn is_terminator(&self) -> bool {
        matches!(self, Instruction::Ret { .. })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Alloca { result, allocated } => write!(f, "{result} = alloca {allocated}"),
            Instruction::Store { value, ptr } => write!(f, "store {}, {}", value.typed(), ptr.typed()),
            Instruction::Load { result, ptr } => write!(f, "{result} = load {}, {}", result.ty(), ptr.typed()),
            Instruction::FAdd { result, lhs, rhs } => write!(f, "{result} = fadd {}, {rhs}", lhs.typed()),
            Instruction::FMul { result, lhs, rhs } => write!(f, "{result} = fmul {}, {rhs}", lhs.typed()),
            Instruction::GetElementPtr {
                result,
                source_ty,
                ptr,
                indices,
            } => {
                write!(f, "{result} = getelementptr {source_ty}, {}", ptr.typed())?;
                for index in indices {
                    write!(f, ", {}", index.typed())?;
                }
                Ok(())
            }
            Instruction::Call {
                result,
                callee,
                signature,
                args,
            } => {
                if let Some(result) = result {
                    write!(f, "{result} = ")?;
                }
                // Variadic callees need the full function type; others only the return type.
                if signature.variadic {
                    write!(f, "call {signature} @{}(", Symbol(callee))?;
                } else {
                    write!(f, "call {} @{}(", signature.return_type, Symbol(callee))?;
                }
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg.typed())?;
                }
                write!(f, ")")
            }
            Instruction::Ret { value: Some(value) } => write!(f, "ret {}", value.typed()),
            Instruction::Ret { value: None } => write!(f, "ret void"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double_ptr(id: u32) -> Value {
        Value::Local(id, IrType::ptr_to(IrType::Double))
    }

    #[test]
    fn memory_instructions() {
        let alloca = Instruction::Alloca {
            result: double_ptr(0),
            allocated: IrType::Double,
        };
        assert_eq!(alloca.to_string(), "%0 = alloca double");

        let store = Instruction::Store {
            value: Value::ConstFloat(5.0),
            ptr: double_ptr(0),
        };
        assert_eq!(store.to_string(), "store double 5.0, double* %0");

        let load = Instruction::Load {
            result: Value::Local(1, IrType::Double),
            ptr: double_ptr(0),
        };
        assert_eq!(load.to_string(), "%1 = load double, double* %0");
    }

    #[test]
    fn arithmetic_and_gep() {
        let add = Instruction::FAdd {
            result: Value::Local(2, IrType::Double),
            lhs: Value::ConstFloat(2.0),
            rhs: Value::Local(1, IrType::Double),
        };
        assert_eq!(add.to_string(), "%2 = fadd double 2.0, %1");

        let gep = Instruction::GetElementPtr {
            result: Value::Local(0, IrType::i8_ptr()),
            source_ty: IrType::char_array(3),
            ptr: Value::Global(".str.0".into(), IrType::ptr_to(IrType::char_array(3))),
            indices: vec![Value::ConstInt(0), Value::ConstInt(0)],
        };
        assert_eq!(
            gep.to_string(),
            "%0 = getelementptr [3 x i8], [3 x i8]* @.str.0, i32 0, i32 0"
        );
    }

    #[test]
    fn variadic_call_and_ret() {
        let call = Instruction::Call {
            result: Some(Value::Local(4, IrType::I32)),
            callee: "printf".into(),
            signature: FunctionType {
                return_type: IrType::I32,
                params: vec![IrType::i8_ptr()],
                variadic: true,
            },
            args: vec![Value::Local(3, IrType::i8_ptr()), Value::ConstFloat(1.0)],
        };
        assert_eq!(call.to_string(), "%4 = call i32 (i8*, ...) @printf(i8* %3, double 1.0)");

        let ret = Instruction::Ret { value: None };
        assert!(ret.is_terminator());
        assert_eq!(ret.to_string(), "ret void");
    }
}

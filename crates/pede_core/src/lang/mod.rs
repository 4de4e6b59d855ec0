//! pede language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and
//! metadata via registry tables instead of matching on strings.
//!
//! ## Examples
//! ```rust
//! use pede_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("print"), Some(KeywordId::Print));
//! assert_eq!(keywords::as_str(KeywordId::Print), "print");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;

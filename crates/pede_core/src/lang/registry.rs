//! Shareable metadata for `pede_core::lang` registries.
//!
//! These types are lightweight and `Copy` so every registry can live in a `const` table.
//!
//! ## Notes
//! - Metadata is meant for tooling, docs and diagnostics; enforcement of syntax rules lives in the lexer/parser.

/// Language version a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use pede_core::lang::registry::Since;
///
/// let since = Since(0, 1);
/// assert_eq!(since.to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Since(pub u8, pub u8);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Lifecycle status of a language vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// A small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use pede_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "print(1)",
///     note: Some("Print a number."),
/// };
/// assert!(ex.code.starts_with("print"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

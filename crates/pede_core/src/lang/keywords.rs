//! Define the reserved keyword vocabulary for the pede language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Print` is an ordinary identifier.
//! - The language currently reserves a single word. Control-flow keywords would be added here first.
//!
//! ## Examples
//! ```rust
//! use pede_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("print"), Some(KeywordId::Print));
//! assert_eq!(keywords::from_str("Print"), None);
//! ```

use super::registry::{Example, Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Print,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Starts a statement (`print`).
    Statement,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[KeywordInfo {
    id: KeywordId::Print,
    canonical: "print",
    category: KeywordCategory::Statement,
    description: "Write a value followed by a newline to standard output.",
    since: Since(0, 1),
    stability: Stability::Stable,
    examples: &[
        Example {
            code: "print(42)",
            note: Some("Numbers print with six decimal places."),
        },
        Example {
            code: "print(\"hello\")",
            note: None,
        },
    ],
}];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_round_trips_through_its_spelling() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("PRINT"), None);
        assert_eq!(from_str("printf"), None);
    }
}

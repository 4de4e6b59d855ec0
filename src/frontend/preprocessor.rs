//! Source preprocessing.
//!
//! Runs before lexing and removes everything the lexer should never see: `//` comments (whole-line and trailing),
//! blank lines, and leading/trailing whitespace on every line.
//!
//! ## Notes
//! - Diagnostics produced later point into the *preprocessed* text, so callers rendering errors must use the output of
//!   [`preprocess`] as the source, not the original file.
//! - Trailing comments are cut at the first `//` on the line, even inside a string literal.

/// Predicate over a trimmed line; `true` drops the line.
pub type Rule = fn(&str) -> bool;

pub const COMMENT_PREFIX: &str = "//";

/// Whole-line `//` comment.
pub fn is_comment_line(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

pub fn is_blank_line(line: &str) -> bool {
    line.is_empty()
}

/// Preprocessing configuration
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Lines matching any rule are dropped.
    pub rules: Vec<Rule>,
    /// Cut everything from the first `//` on a kept line.
    pub strip_trailing_comments: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            rules: vec![is_comment_line as Rule, is_blank_line],
            strip_trailing_comments: true,
        }
    }
}

impl PreprocessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_trailing_comments_stripped(mut self, strip: bool) -> Self {
        self.strip_trailing_comments = strip;
        self
    }
}

/// Apply `config` to `input` line by line.
///
/// Kept lines are trimmed and joined with `\n`; non-empty output always ends with exactly one newline.
pub fn preprocess(input: &str, config: &PreprocessConfig) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for line in input.split('\n') {
        let line = line.trim();
        if config.rules.iter().any(|rule| rule(line)) {
            continue;
        }

        let line = match line.find(COMMENT_PREFIX) {
            Some(idx) if config.strip_trailing_comments => {
                let code = line[..idx].trim();
                if code.is_empty() {
                    continue;
                }
                code
            }
            _ => line,
        };
        kept.push(line);
    }

    let mut out = kept.join("\n");
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    tracing::debug!(input_lines = input.lines().count(), kept_lines = kept.len(), "preprocessed source");
    out
}

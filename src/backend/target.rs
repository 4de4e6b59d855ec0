//! Target selection.
//!
//! Targets are named the way users type them on the command line (`darwin`, `linux`, `windows` / `amd64`, `arm64`)
//! and resolved to an LLVM target triple through a fixed table. Pairs outside the table resolve to no triple at all,
//! leaving the choice to clang.

use std::fmt;

/// `(os, arch, triple)`
const TARGET_TRIPLES: &[(&str, &str, &str)] = &[
    ("darwin", "arm64", "arm64-apple-macosx15.0.0"),
    ("darwin", "amd64", "x86_64-apple-darwin"),
    ("linux", "amd64", "x86_64-pc-linux-gnu"),
    ("linux", "arm64", "aarch64-linux-gnu"),
    ("windows", "amd64", "x86_64-w64-mingw32"),
];

/// A requested build target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Target {
    pub os: String,
    pub arch: String,
}

impl Target {
    pub fn from_os_arch(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The machine this compiler runs on, in target-table spelling.
    pub fn host() -> Self {
        Self::from_os_arch(
            host_os_name(std::env::consts::OS),
            host_arch_name(std::env::consts::ARCH),
        )
    }

    /// LLVM triple for this target, or `""` when the pair is empty or not in the table.
    pub fn triple(&self) -> &'static str {
        if self.os.is_empty() || self.arch.is_empty() {
            return "";
        }
        TARGET_TRIPLES
            .iter()
            .find(|(os, arch, _)| *os == self.os && *arch == self.arch)
            .map_or("", |(_, _, triple)| triple)
    }

    pub fn is_known(&self) -> bool {
        !self.triple().is_empty()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Map Rust's `std::env::consts::OS` spelling to the table's.
pub fn host_os_name(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

/// Map Rust's `std::env::consts::ARCH` spelling to the table's.
pub fn host_arch_name(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        other => other,
    }
}

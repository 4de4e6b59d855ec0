//! File-level build driver.
//!
//! Reads a `.pede` file, preprocesses it, compiles it to an IR module, writes `<output>.ll`, and links it into a native
//! executable with an external C compiler (clang by default):
//!
//! ```text
//! input.pede → preprocess → compile → output.ll → cc output.ll -o output
//! ```
//!
//! The intermediate `.ll` file is removed after a successful link unless `keep_ir` is set.

use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use super::ir::Module;
use super::target::Target;
use crate::CompileFailure;
use crate::frontend::preprocessor::{PreprocessConfig, preprocess};

pub const DEFAULT_CC: &str = "clang";

/// Build configuration
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub target: Target,
    pub input: PathBuf,
    /// Executable path; the IR file is this path with `.ll` appended.
    pub output: PathBuf,
    pub keep_ir: bool,
    /// C compiler used to assemble and link the IR.
    pub cc: String,
    pub preprocess: PreprocessConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            target: Target::host(),
            input: PathBuf::new(),
            output: PathBuf::new(),
            keep_ir: false,
            cc: DEFAULT_CC.to_string(),
            preprocess: PreprocessConfig::default(),
        }
    }
}

impl BuildConfig {
    /// Config for `input` with the output named after the input's file stem.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = default_output(&input).unwrap_or_default();
        Self {
            input,
            output,
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_keep_ir(mut self, keep_ir: bool) -> Self {
        self.keep_ir = keep_ir;
        self
    }

    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc = cc.into();
        self
    }

    /// `<output>.ll`
    pub fn ir_path(&self) -> PathBuf {
        let mut path = OsString::from(self.output.as_os_str());
        path.push(".ll");
        PathBuf::from(path)
    }
}

/// Output name for `input`: its file name without the extension, in the current directory.
pub fn default_output(input: &Path) -> Option<PathBuf> {
    input
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .map(PathBuf::from)
}

/// What a successful build left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifacts {
    pub executable: PathBuf,
    /// The `.ll` file, when it was kept.
    pub ir_file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The program was rejected. `preprocessed` is the text diagnostics point into.
    #[error("failed to compile '{}'", .path.display())]
    Compile {
        path: PathBuf,
        preprocessed: String,
        #[source]
        failure: CompileFailure,
    },

    #[error("'{cc}' exited with {status}")]
    Toolchain { cc: String, status: ExitStatus },

    #[error("failed to run '{cc}' (is it installed and on PATH?): {source}")]
    ToolchainSpawn {
        cc: String,
        #[source]
        source: io::Error,
    },
}

/// Read, preprocess and compile `input`.
///
/// Returns the preprocessed text alongside the module so callers can render diagnostics or dump IR.
pub fn compile_file(
    input: &Path,
    target: &Target,
    config: &PreprocessConfig,
) -> Result<(String, Module), BuildError> {
    let raw = fs::read_to_string(input).map_err(|source| BuildError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let preprocessed = preprocess(&raw, config);

    match crate::compile_for(&preprocessed, target) {
        Ok(module) => Ok((preprocessed, module)),
        Err(failure) => Err(BuildError::Compile {
            path: input.to_path_buf(),
            preprocessed,
            failure,
        }),
    }
}

/// Build a native executable as described by `config`.
///
/// ## Errors
///
/// Any I/O failure, compile error, or toolchain failure stops the build. On a toolchain failure the `.ll` file is
/// left in place for inspection.
#[tracing::instrument(skip_all, fields(input = %config.input.display(), target = %config.target))]
pub fn build(config: &BuildConfig) -> Result<BuildArtifacts, BuildError> {
    let (_, module) = compile_file(&config.input, &config.target, &config.preprocess)?;

    let ir_path = config.ir_path();
    write_ir(&module, &ir_path)?;
    link(&config.cc, &ir_path, &config.output)?;

    let ir_file = if config.keep_ir {
        Some(ir_path)
    } else {
        if let Err(err) = fs::remove_file(&ir_path) {
            tracing::warn!(file = %ir_path.display(), error = %err, "could not remove IR file");
        }
        None
    };

    tracing::info!(
        os = %config.target.os,
        arch = %config.target.arch,
        output = %config.output.display(),
        "pede was built"
    );
    Ok(BuildArtifacts {
        executable: config.output.clone(),
        ir_file,
    })
}

/// Serialize `module` to `path`.
pub fn write_ir(module: &Module, path: &Path) -> Result<(), BuildError> {
    tracing::debug!(file = %path.display(), "writing IR");
    let io_err = |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    module.serialize(&mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)
}

/// Run `<cc> <ir_file> -o <output>` with inherited stdio.
pub fn link(cc: &str, ir_file: &Path, output: &Path) -> Result<(), BuildError> {
    tracing::debug!(cc, ir = %ir_file.display(), output = %output.display(), "linking");
    let status = Command::new(cc)
        .arg(ir_file)
        .arg("-o")
        .arg(output)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| BuildError::ToolchainSpawn {
            cc: cc.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(BuildError::Toolchain {
            cc: cc.to_string(),
            status,
        })
    }
}

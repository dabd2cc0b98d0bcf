//! CompilerRunner port - runs one compiler invocation to completion

use std::path::Path;

use crate::domain::value_objects::Invocation;

/// What to do with the compiler's stdout/stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Pass diagnostics straight through to the terminal
    Inherit,
    /// Collect diagnostics so the caller can report them
    Capture,
}

/// Exit status of a finished compiler process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
    pub success: bool,
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
    /// Combined stdout and stderr, only in `OutputMode::Capture`
    pub diagnostics: Option<String>,
}

impl CompileOutput {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            code: Some(0),
            diagnostics: None,
        }
    }

    pub fn failed(code: Option<i32>, diagnostics: Option<String>) -> Self {
        Self {
            success: false,
            code,
            diagnostics,
        }
    }
}

/// The compiler process could not be run at all
#[derive(Debug)]
pub enum CompilerError {
    /// Program not resolvable on PATH
    NotFound(String),
    /// Any other spawn or wait failure
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CompilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompilerError::NotFound(program) => write!(f, "compiler '{}' not found", program),
            CompilerError::Spawn { program, source } => {
                write!(f, "failed to run '{}': {}", program, source)
            }
        }
    }
}

impl std::error::Error for CompilerError {}

impl From<CompilerError> for crate::error::OjError {
    fn from(err: CompilerError) -> Self {
        match err {
            CompilerError::NotFound(compiler) => crate::error::OjError::CompilerNotFound { compiler },
            CompilerError::Spawn { source, .. } => crate::error::OjError::Io(source),
        }
    }
}

/// Runs a compiler invocation synchronously
///
/// Implementations:
/// - `ProcessCompiler` - spawns the program with `std::process::Command`
pub trait CompilerRunner {
    fn run(
        &self,
        invocation: &Invocation,
        working_dir: &Path,
        mode: OutputMode,
    ) -> Result<CompileOutput, CompilerError>;
}

//! Error types for ojdrive
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow` and
//! maps them to process exit codes via [`OjError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ojdrive operations
pub type OjResult<T> = Result<T, OjError>;

/// Main error type for ojdrive operations
#[derive(Error, Debug)]
pub enum OjError {
    /// The compiler ran and returned a non-zero status
    #[error("build failed: `{command}` {}", describe_status(.code))]
    BuildFailure {
        command: String,
        code: Option<i32>,
        /// Captured compiler output (only when output was not passed through)
        diagnostics: Option<String>,
    },

    /// The source file to compile does not exist
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The compiler could not be started
    #[error("compiler '{compiler}' not found on PATH")]
    CompilerNotFound { compiler: String },

    /// No judge access token was supplied
    #[error("access token not provided; use --token or set ACMOJ_TOKEN")]
    MissingToken,

    /// The code file named for submission does not exist
    #[error("code file not found at {path}")]
    CodeFileNotFound { path: PathBuf },

    /// Judge API request failed (transport, HTTP status, or body)
    #[error("API request failed: {message}")]
    ApiRequest {
        message: String,
        body: Option<String>,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

impl OjError {
    /// Process exit code for this error.
    ///
    /// A failed compile propagates the compiler's own status.
    pub fn exit_code(&self) -> i32 {
        match self {
            OjError::BuildFailure {
                code: Some(code), ..
            } if *code != 0 => *code,
            OjError::CompilerNotFound { .. } => 127,
            _ => 1,
        }
    }

    /// Short machine-readable identifier used in JSON error events.
    pub fn kind(&self) -> &'static str {
        match self {
            OjError::BuildFailure { .. } => "build_failure",
            OjError::SourceNotFound { .. } => "source_not_found",
            OjError::CompilerNotFound { .. } => "compiler_not_found",
            OjError::MissingToken => "missing_token",
            OjError::CodeFileNotFound { .. } => "code_file_not_found",
            OjError::ApiRequest { .. } => "api_request",
            OjError::InvalidConfig { .. } => "invalid_config",
            OjError::Io(_) => "io",
        }
    }
}

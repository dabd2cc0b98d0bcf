//! Shared JSON event types for consistent CLI output.

use serde::Serialize;
use serde_json::Value;

use ojdrive::{BuildResult, BuildStatus, CleanResult, OjError};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Outcome of a build: `build_complete`, `build_skipped` or `build_dry_run`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildResultEvent {
    pub event: &'static str,
    pub artifact: String,
    pub freshness: &'static str,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Compiler warnings captured from a successful build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,
}

impl BuildResultEvent {
    pub fn from_result(result: &BuildResult) -> Self {
        let event = match result.status {
            BuildStatus::Built => "build_complete",
            BuildStatus::UpToDate => "build_skipped",
            BuildStatus::DryRun => "build_dry_run",
        };
        Self {
            event,
            artifact: result.artifact.display().to_string(),
            freshness: result.freshness.id(),
            command: result.command.clone(),
            duration_ms: result
                .compiled()
                .then(|| result.elapsed.as_millis() as u64),
            diagnostics: result.diagnostics.clone().filter(|d| !d.is_empty()),
        }
    }
}

/// Event emitted after `clean`.
#[derive(Debug, Clone, Serialize)]
pub struct CleanCompleteEvent {
    pub event: &'static str,
    pub artifact: String,
    pub removed: bool,
}

impl CleanCompleteEvent {
    pub fn from_result(result: &CleanResult) -> Self {
        Self {
            event: "clean_complete",
            artifact: result.artifact.display().to_string(),
            removed: result.removed,
        }
    }
}

/// Judge API result for `submit` / `status`.
#[derive(Debug, Clone, Serialize)]
pub struct JudgeResponseEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub response: &'a Value,
}

impl<'a> JudgeResponseEvent<'a> {
    pub fn new(command: &'a str, response: &'a Value) -> Self {
        Self {
            event: "judge_response",
            command,
            response,
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'static str,
    pub message: String,
    pub exit_code: i32,
    /// Captured compiler output for build failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,
    /// Response text for failed judge requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, err: &anyhow::Error) -> Self {
        let oj = err.downcast_ref::<OjError>();
        let (diagnostics, body) = match oj {
            Some(OjError::BuildFailure { diagnostics, .. }) => (diagnostics.clone(), None),
            Some(OjError::ApiRequest { body, .. }) => (None, body.clone()),
            _ => (None, None),
        };

        Self {
            event: "error",
            command,
            code: oj.map(OjError::kind).unwrap_or("error"),
            message: err.to_string(),
            exit_code: oj.map(OjError::exit_code).unwrap_or(1),
            diagnostics,
            body,
        }
    }
}

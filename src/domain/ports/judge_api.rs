//! JudgeApi port - the online judge's submission endpoints

use serde::Serialize;
use serde_json::Value;

/// Form body of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitRequest {
    #[serde(skip)]
    pub problem_id: u64,
    pub language: String,
    pub code: String,
}

/// Judge request errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, TLS, or timeout failure
    Transport(String),
    /// Server answered with a non-success status
    Status { status: u16, body: String },
    /// Success status but the body was not JSON
    InvalidBody(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "{}", msg),
            ApiError::Status { status, .. } => write!(f, "HTTP {}", status),
            ApiError::InvalidBody(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for crate::error::OjError {
    fn from(err: ApiError) -> Self {
        let body = match &err {
            ApiError::Status { body, .. } if !body.is_empty() => Some(body.clone()),
            _ => None,
        };
        crate::error::OjError::ApiRequest {
            message: err.to_string(),
            body,
        }
    }
}

/// Online judge client
///
/// Implementations:
/// - `HttpJudgeClient` - blocking HTTP against the ACMOJ REST API
pub trait JudgeApi {
    /// Submit code for a problem
    fn submit(&self, request: &SubmitRequest) -> Result<Value, ApiError>;

    /// Fetch the details of a submission
    fn submission_detail(&self, submission_id: u64) -> Result<Value, ApiError>;
}

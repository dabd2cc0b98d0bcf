//! ACMOJ HTTP client
//!
//! Blocking client for the judge's REST API. Every request carries the
//! bearer token; submissions are sent as a urlencoded form.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{json, Value};

use crate::domain::ports::{ApiError, JudgeApi, SubmitRequest};

/// Public ACMOJ API root
pub const DEFAULT_API_BASE: &str = "https://acm.sjtu.edu.cn/OnlineJudge/api/v1";

const USER_AGENT: &str = concat!("ojdrive/", env!("CARGO_PKG_VERSION"));

/// Judge API client
pub struct HttpJudgeClient {
    /// Base URL of the API, without trailing slash
    base_url: String,
    /// Bearer token
    token: String,
    /// HTTP client
    client: Client,
}

impl HttpJudgeClient {
    /// Create a new client
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    /// Full URL for an API path such as `/submission/1`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}

impl JudgeApi for HttpJudgeClient {
    fn submit(&self, request: &SubmitRequest) -> Result<Value, ApiError> {
        let url = self.endpoint(&format!("/problem/{}/submit", request.problem_id));
        self.send(self.client.post(url).form(request))
    }

    fn submission_detail(&self, submission_id: u64) -> Result<Value, ApiError> {
        let url = self.endpoint(&format!("/submission/{}", submission_id));
        self.send(self.client.get(url))
    }
}

/// Turn a raw HTTP status and body into the JSON result callers see.
///
/// - 204 becomes a synthetic success object
/// - any other non-2xx status is an error carrying the body text
/// - an empty 2xx body becomes `{"status": "success"}`
/// - otherwise the body must be JSON
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if status == 204 {
        return Ok(json!({"status": "success", "message": "Operation successful"}));
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            body: body.to_string(),
        });
    }

    if body.is_empty() {
        return Ok(json!({"status": "success"}));
    }

    serde_json::from_str(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

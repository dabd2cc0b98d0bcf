//! Status Use Case

use serde_json::Value;

use crate::domain::ports::JudgeApi;
use crate::error::OjResult;

/// Status use case - fetches a submission's details
pub struct StatusUseCase<API>
where
    API: JudgeApi,
{
    api: API,
}

impl<API> StatusUseCase<API>
where
    API: JudgeApi,
{
    pub fn new(api: API) -> Self {
        Self { api }
    }

    pub fn execute(&self, submission_id: u64) -> OjResult<Value> {
        Ok(self.api.submission_detail(submission_id)?)
    }
}

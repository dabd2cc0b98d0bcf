//! Submit Use Case

use std::path::Path;

use serde_json::Value;

use crate::domain::ports::{FileSystem, FsError, JudgeApi, SubmitRequest};
use crate::domain::value_objects::SubmissionSource;
use crate::error::{OjError, OjResult};

/// Submit use case - resolves the code and posts it to the judge
pub struct SubmitUseCase<FS, API>
where
    FS: FileSystem,
    API: JudgeApi,
{
    fs: FS,
    api: API,
}

impl<FS, API> SubmitUseCase<FS, API>
where
    FS: FileSystem,
    API: JudgeApi,
{
    pub fn new(fs: FS, api: API) -> Self {
        Self { fs, api }
    }

    /// Submit `source` for `problem_id`.
    ///
    /// Code files are resolved against `root`; a git URL is sent as the
    /// code itself.
    pub fn execute(
        &self,
        root: &Path,
        problem_id: u64,
        language: &str,
        source: &SubmissionSource,
    ) -> OjResult<Value> {
        let code = match source {
            SubmissionSource::GitUrl(url) => url.clone(),
            SubmissionSource::CodeFile(path) => match self.fs.read(&root.join(path)) {
                Ok(code) => code,
                Err(FsError::NotFound(_)) => {
                    return Err(OjError::CodeFileNotFound { path: path.clone() })
                }
                Err(e) => return Err(e.into()),
            },
        };

        let request = SubmitRequest {
            problem_id,
            language: language.to_string(),
            code,
        };

        Ok(self.api.submit(&request)?)
    }
}

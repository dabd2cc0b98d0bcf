//! Where the submitted code comes from

use std::path::PathBuf;

/// Exactly one of a local code file or a git repository URL.
///
/// For git submissions the judge receives the URL itself as the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionSource {
    CodeFile(PathBuf),
    GitUrl(String),
}

impl SubmissionSource {
    /// Build from the two mutually exclusive CLI options.
    ///
    /// Returns `None` when both or neither are given.
    pub fn from_options(code_file: Option<PathBuf>, git_url: Option<String>) -> Option<Self> {
        match (code_file, git_url) {
            (Some(path), None) => Some(SubmissionSource::CodeFile(path)),
            (None, Some(url)) => Some(SubmissionSource::GitUrl(url)),
            _ => None,
        }
    }
}

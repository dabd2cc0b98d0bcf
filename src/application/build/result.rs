//! Build result types

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::value_objects::Freshness;

/// What the build ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    /// Compiler ran and the artifact was replaced
    Built,
    /// Artifact was already up to date; nothing ran
    UpToDate,
    /// Dry run; nothing ran
    DryRun,
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildStatus::Built => write!(f, "built"),
            BuildStatus::UpToDate => write!(f, "up_to_date"),
            BuildStatus::DryRun => write!(f, "dry_run"),
        }
    }
}

/// Result of a successful build operation
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub status: BuildStatus,
    pub freshness: Freshness,
    /// Artifact path as configured (relative to the working directory)
    pub artifact: PathBuf,
    /// Command line that builds the artifact in place
    pub command: String,
    pub elapsed: Duration,
    /// Compiler output captured on success (warnings), only in capture mode
    pub diagnostics: Option<String>,
}

impl BuildResult {
    pub fn compiled(&self) -> bool {
        self.status == BuildStatus::Built
    }
}

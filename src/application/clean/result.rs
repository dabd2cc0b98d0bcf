//! Clean result types

use std::path::PathBuf;

/// Result of a clean operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanResult {
    /// Artifact path as configured
    pub artifact: PathBuf,
    /// Whether a file was actually deleted
    pub removed: bool,
}

impl CleanResult {
    pub fn removed(artifact: PathBuf) -> Self {
        Self {
            artifact,
            removed: true,
        }
    }

    pub fn already_clean(artifact: PathBuf) -> Self {
        Self {
            artifact,
            removed: false,
        }
    }
}

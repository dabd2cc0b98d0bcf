//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::Path;
use std::time::SystemTime;

use tempfile::TempDir;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Prefix of staging directories created beside the artifact
pub const STAGING_PREFIX: &str = ".ojdrive-";

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    type Staging = TempDir;

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn modified(&self, path: &Path) -> FsResult<Option<SystemTime>> {
        match std::fs::metadata(path) {
            Ok(meta) => meta.modified().map(Some).map_err(|e| FsError::at(path, e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FsError::at(path, e)),
        }
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::at(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        std::fs::rename(from, to).map_err(|e| FsError::at(from, e))
    }

    fn staging_dir(&self, dir: &Path) -> FsResult<TempDir> {
        tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(dir)
            .map_err(|e| FsError::at(dir, e))
    }
}

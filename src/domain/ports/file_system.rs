//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows use cases to inspect, move, and delete files
//! without depending on concrete implementations (local, mock).

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Classify an I/O error, remembering which path it concerned
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

impl From<FsError> for crate::error::OjError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Io(io) => crate::error::OjError::Io(io),
            FsError::NotFound(path) => crate::error::OjError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )),
            FsError::PermissionDenied(path) => crate::error::OjError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            )),
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Handle to a staging directory; the directory goes away when it drops
    type Staging: AsRef<Path>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Modification time, or `None` when the file is absent
    fn modified(&self, path: &Path) -> FsResult<Option<SystemTime>>;

    /// Read file content as UTF-8
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Atomically move `from` over `to` (same file system)
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Create a private temporary directory in `dir`, removed on drop
    fn staging_dir(&self, dir: &Path) -> FsResult<Self::Staging>;
}

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `compiler/` - Compiler processes
//! - `judge/` - HTTP client for the online judge

pub mod compiler;
pub mod fs;
pub mod judge;

// Re-export for convenience
pub use compiler::ProcessCompiler;
pub use fs::LocalFs;
pub use judge::{HttpJudgeClient, DEFAULT_API_BASE};

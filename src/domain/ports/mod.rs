//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod compiler_runner;
pub mod file_system;
pub mod judge_api;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use compiler_runner::{CompileOutput, CompilerError, CompilerRunner, OutputMode};
pub use file_system::{FileSystem, FsError, FsResult};
pub use judge_api::{ApiError, JudgeApi, SubmitRequest};

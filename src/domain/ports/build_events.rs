//! Build Event Port
//!
//! Lets callers observe a build as it progresses (verbose terminal output,
//! NDJSON streams) without the use case doing any printing itself.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::value_objects::Freshness;

/// Event emitted during a build
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Source and artifact timestamps were compared
    FreshnessChecked {
        source: PathBuf,
        artifact: PathBuf,
        freshness: Freshness,
    },

    /// Compiler is about to run (the command shown targets the final artifact)
    CompileStarted { command: String },

    /// Artifact was already up to date
    Skipped { artifact: PathBuf },

    /// Staged output was moved into place
    Completed { artifact: PathBuf, elapsed: Duration },
}

/// Trait for receiving build events
pub trait BuildEventSink {
    fn on_event(&self, event: BuildEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}

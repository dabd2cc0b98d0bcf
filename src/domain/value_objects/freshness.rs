//! Freshness value object - whether the artifact needs rebuilding
//!
//! Follows make's rule: rebuild when the artifact is missing or the source
//! was modified after it. Equal timestamps count as up to date.

use std::fmt;
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// No artifact on disk
    Missing,
    /// Source modified after the artifact
    Stale,
    /// Artifact at least as new as the source
    UpToDate,
}

impl Freshness {
    pub fn from_times(source: SystemTime, artifact: Option<SystemTime>) -> Self {
        match artifact {
            None => Freshness::Missing,
            Some(artifact) if source > artifact => Freshness::Stale,
            Some(_) => Freshness::UpToDate,
        }
    }

    pub fn needs_build(&self) -> bool {
        !matches!(self, Freshness::UpToDate)
    }

    /// Machine-readable identifier for JSON output
    pub fn id(&self) -> &'static str {
        match self {
            Freshness::Missing => "missing",
            Freshness::Stale => "stale",
            Freshness::UpToDate => "up_to_date",
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Freshness::Missing => write!(f, "missing"),
            Freshness::Stale => write!(f, "stale"),
            Freshness::UpToDate => write!(f, "up to date"),
        }
    }
}

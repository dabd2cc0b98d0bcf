//! Value Objects
//!
//! Immutable types with no identity, compared by value.

mod freshness;
mod invocation;
mod submission_source;

pub use freshness::Freshness;
pub use invocation::Invocation;
pub use submission_source::SubmissionSource;

//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Freshness check, staged compile, move into place
//! - `CleanUseCase` - Remove the artifact if present
//! - `SubmitUseCase` - Read the code and submit it to the judge
//! - `StatusUseCase` - Query a submission

pub mod build;
pub mod clean;
pub mod judge;

pub use build::{BuildOptions, BuildResult, BuildStatus, BuildUseCase};
pub use clean::{CleanResult, CleanUseCase};
pub use judge::{StatusUseCase, SubmitUseCase};

//! ojdrive - build driver and online judge client
//!
//! Compiles a single-file competitive programming solution into a fixed
//! artifact with make-style freshness checks, removes that artifact on
//! request, and submits solutions to the ACMOJ online judge.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, BuildResult, BuildStatus, CleanResult};
pub use config::Config;
pub use domain::entities::BuildRecipe;
pub use error::{OjError, OjResult};

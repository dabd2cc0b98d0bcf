//! Build Use Case
//!
//! Compiles the recipe's source into its artifact.
//!
//! This module handles:
//! - Comparing source and artifact modification times
//! - Running the compiler into a staging directory
//! - Moving the staged artifact into place only on success

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::{BuildResult, BuildStatus};
pub use use_case::BuildUseCase;

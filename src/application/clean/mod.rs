//! Clean Use Case
//!
//! Removes the build artifact. Cleaning an already clean workspace is a
//! successful no-op.

mod result;
mod use_case;

pub use result::CleanResult;
pub use use_case::CleanUseCase;

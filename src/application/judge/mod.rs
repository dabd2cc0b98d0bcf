//! Judge Use Cases
//!
//! Submitting code to the online judge and checking on submissions.

mod status;
mod submit;

pub use status::StatusUseCase;
pub use submit::SubmitUseCase;

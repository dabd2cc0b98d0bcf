//! Command handlers
//!
//! Each handler receives a [`Session`] (working directory, effective
//! configuration, UI context) and returns `anyhow::Result`; `main` maps
//! failures to exit codes.

pub mod build;
pub mod clean;
pub mod session;
pub mod status;
pub mod submit;

pub use session::Session;

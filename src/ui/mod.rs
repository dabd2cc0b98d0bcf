//! Terminal and JSON output for the ojdrive binary.

pub mod build_sink;
pub mod context;
pub mod error;
pub mod json;
pub mod terminal;
pub mod theme;

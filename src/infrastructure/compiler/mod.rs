//! Compiler process implementations

mod process;

pub use process::ProcessCompiler;

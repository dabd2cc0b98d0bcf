//! Build recipe entity
//!
//! A recipe names the compiler, its flags, the single source file, and the
//! artifact it produces. The defaults reproduce the classic one-rule
//! Makefile: `g++ -std=c++17 -O2 -Wall -Wextra -o code solution.cpp`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Invocation;

/// Compiler used when none is configured
pub const DEFAULT_COMPILER: &str = "g++";

/// Flags passed verbatim on every compile when none are configured
pub const DEFAULT_FLAGS: &[&str] = &["-std=c++17", "-O2", "-Wall", "-Wextra"];

/// Source file compiled when none is configured
pub const DEFAULT_SOURCE: &str = "solution.cpp";

/// Artifact produced when none is configured
pub const DEFAULT_OUTPUT: &str = "code";

/// Everything needed to compile the solution into its artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecipe {
    pub compiler: String,
    pub flags: Vec<String>,
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Default for BuildRecipe {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
            flags: DEFAULT_FLAGS.iter().map(|f| f.to_string()).collect(),
            source: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl BuildRecipe {
    pub fn new(
        compiler: impl Into<String>,
        flags: Vec<String>,
        source: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            compiler: compiler.into(),
            flags,
            source: source.into(),
            output: output.into(),
        }
    }

    /// The command that builds the artifact in place.
    pub fn invocation(&self) -> Invocation {
        self.invocation_writing_to(&self.output)
    }

    /// The same command, but with the compiler's `-o` pointed elsewhere.
    ///
    /// Flags always come first and in their configured order, followed by
    /// `-o <output> <source>`.
    pub fn invocation_writing_to(&self, output: &Path) -> Invocation {
        let mut args: Vec<OsString> = self.flags.iter().map(OsString::from).collect();
        args.push(OsString::from("-o"));
        args.push(output.as_os_str().to_os_string());
        args.push(self.source.as_os_str().to_os_string());

        Invocation::new(self.compiler.clone(), args)
    }

    /// Source path resolved against a working directory
    pub fn source_in(&self, root: &Path) -> PathBuf {
        root.join(&self.source)
    }

    /// Artifact path resolved against a working directory
    pub fn output_in(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}

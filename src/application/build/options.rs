//! Build options

use crate::domain::ports::OutputMode;

/// Options for the build command
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Rebuild even when the artifact is up to date
    pub force: bool,
    /// Report what would run without running it
    pub dry_run: bool,
    /// Whether compiler diagnostics go to the terminal or are captured
    pub output_mode: OutputMode,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            force: false,
            dry_run: false,
            output_mode: OutputMode::Inherit,
        }
    }
}

impl BuildOptions {
    /// Create new build options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set force
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set output mode
    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }
}

//! Configuration module for ojdrive
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (OJDRIVE_*, ACMOJ_TOKEN)
//! 3. Project config (./ojdrive.toml)
//! 4. User config (~/.config/ojdrive/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Build settings are never taken from the environment.

mod loader;
mod types;

pub use loader::{ConfigSource, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{BuildConfig, ColorMode, Config, JudgeConfig, OutputConfig, Verbosity};

//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    BuildRecipe, DEFAULT_COMPILER, DEFAULT_FLAGS, DEFAULT_OUTPUT, DEFAULT_SOURCE,
};
use crate::error::OjResult;
use crate::infrastructure::DEFAULT_API_BASE;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// `[build]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_compiler")]
    pub compiler: String,

    #[serde(default = "default_flags")]
    pub flags: Vec<String>,

    #[serde(default = "default_source")]
    pub source: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: default_compiler(),
            flags: default_flags(),
            source: default_source(),
            output: default_output(),
        }
    }
}

impl BuildConfig {
    pub fn recipe(&self) -> BuildRecipe {
        BuildRecipe::new(
            self.compiler.clone(),
            self.flags.clone(),
            self.source.clone(),
            self.output.clone(),
        )
    }
}

fn default_compiler() -> String {
    DEFAULT_COMPILER.to_string()
}

fn default_flags() -> Vec<String> {
    DEFAULT_FLAGS.iter().map(|f| f.to_string()).collect()
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// `[judge]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Fallback token when neither `--token` nor `ACMOJ_TOKEN` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// `[output]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the configured level by the number of `-v` flags
    pub fn raised_by(self, count: u8) -> Self {
        let level = match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
            Verbosity::Debug => 3,
        } + count as usize;

        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub judge: JudgeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> OjResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> OjResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration for a working directory.
    ///
    /// `explicit` (from `--config`) replaces file discovery.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> OjResult<LoadedConfig> {
        loader::discover(root, explicit, loader::user_config_path(), |key| {
            std::env::var(key).ok()
        })
    }
}

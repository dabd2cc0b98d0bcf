//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OjError, OjResult};

use super::types::{Config, Verbosity};

/// File name of the per-workspace config
pub const PROJECT_CONFIG_FILE: &str = "ojdrive.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <PATH>`
    Explicit(PathBuf),
    /// `./ojdrive.toml`
    Project(PathBuf),
    /// `<config_dir>/ojdrive/config.toml`
    User(PathBuf),
    /// The project file layered over the user file
    Layered { user: PathBuf, project: PathBuf },
    /// No file found
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "{} (--config)", p.display()),
            ConfigSource::Project(p) => write!(f, "{} (project)", p.display()),
            ConfigSource::User(p) => write!(f, "{} (user)", p.display()),
            ConfigSource::Layered { user, project } => write!(
                f,
                "{} (project) over {} (user)",
                project.display(),
                user.display()
            ),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Effective configuration plus how it was found
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> OjResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| OjError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective config, then layer env overrides on top.
///
/// `explicit` replaces discovery. Otherwise the user file is the base and
/// the project file overrides it section by section: a `[build]`, `[judge]`
/// or `[output]` table the project file leaves out or leaves empty keeps
/// the user's values.
///
/// A file that exists but does not parse is an error rather than being
/// silently replaced by defaults.
pub fn discover(
    root: &Path,
    explicit: Option<&Path>,
    user_config: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> OjResult<LoadedConfig> {
    let (config, warnings, source) = match explicit {
        Some(path) => {
            let path = root.join(path);
            let (config, warnings) = load_with_warnings(&path)?;
            (config, warnings, ConfigSource::Explicit(path))
        }
        None => {
            let project = Some(root.join(PROJECT_CONFIG_FILE)).filter(|p| p.is_file());
            let user = user_config.filter(|p| p.is_file());

            let mut config = Config::default();
            let mut warnings = Vec::new();
            if let Some(path) = &user {
                let (loaded, file_warnings) = load_with_warnings(path)?;
                config = loaded;
                warnings.extend(file_warnings);
            }
            if let Some(path) = &project {
                let (merged, file_warnings) = overlay(config, path)?;
                config = merged;
                warnings.extend(file_warnings);
            }

            let source = match (user, project) {
                (Some(user), Some(project)) => ConfigSource::Layered { user, project },
                (None, Some(project)) => ConfigSource::Project(project),
                (Some(user), None) => ConfigSource::User(user),
                (None, None) => ConfigSource::Defaults,
            };
            (config, warnings, source)
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config, get_env),
        source,
        warnings,
    })
}

/// Replace each section of `base` that the file at `path` sets.
fn overlay(base: Config, path: &Path) -> OjResult<(Config, Vec<ConfigWarning>)> {
    let (layer, warnings) = load_with_warnings(path)?;
    let content = fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| OjError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut merged = base;
    if has_non_empty_table(&table, "build") {
        merged.build = layer.build;
    }
    if has_non_empty_table(&table, "judge") {
        merged.judge = layer.judge;
    }
    if has_non_empty_table(&table, "output") {
        merged.output = layer.output;
    }

    Ok((merged, warnings))
}

fn has_non_empty_table(root: &toml::Table, key: &str) -> bool {
    match root.get(key) {
        Some(toml::Value::Table(t)) => !t.is_empty(),
        Some(_) => true,
        None => false,
    }
}

/// Apply environment variable overrides (OJDRIVE_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // OJDRIVE_API_BASE
    if let Some(base) = get_env("OJDRIVE_API_BASE").filter(|b| !b.is_empty()) {
        config.judge.api_base = base;
    }

    // OJDRIVE_VERBOSITY
    if let Some(verbosity) = get_env("OJDRIVE_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // OJDRIVE_TIMEOUT_SECS
    if let Some(secs) = get_env("OJDRIVE_TIMEOUT_SECS").and_then(|s| s.trim().parse().ok()) {
        config.judge.timeout_secs = secs;
    }

    config
}

/// `<config_dir>/ojdrive/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ojdrive").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "compiler",
        "flags",
        "source",
        "output",
        "judge",
        "api_base",
        "token",
        "timeout_secs",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

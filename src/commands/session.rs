//! Per-invocation state shared by all commands

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use ojdrive::config::{Config, ConfigWarning, LoadedConfig, Verbosity};
use ojdrive::presentation::Cli;
use ojdrive::{OjError, OjResult};

use crate::ui::context::UiContext;
use crate::ui::theme::Icon;

pub struct Session {
    /// Absolute directory the recipe paths are resolved against
    pub root: PathBuf,
    pub config: Config,
    pub ui: UiContext,
}

impl Session {
    /// Resolve the working directory and load the effective configuration.
    pub fn open(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read the current directory")?;
        let root = match &cli.directory {
            Some(dir) => cwd.join(dir),
            None => cwd,
        };
        if !root.is_dir() {
            bail!("cannot change to directory '{}'", root.display());
        }

        let loaded = Config::discover(&root, cli.config.as_deref())?;
        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);
        report_config(&ui, &loaded);

        Ok(Self {
            root,
            config: loaded.config,
            ui,
        })
    }

    /// Judge token from `--token`/`ACMOJ_TOKEN`, else `judge.token`.
    pub fn token(&self, cli_token: Option<&str>) -> OjResult<String> {
        resolve_token(cli_token, self.config.judge.token.as_deref())
    }
}

fn resolve_token(cli_token: Option<&str>, config_token: Option<&str>) -> OjResult<String> {
    cli_token
        .filter(|t| !t.is_empty())
        .or(config_token.filter(|t| !t.is_empty()))
        .map(str::to_string)
        .ok_or(OjError::MissingToken)
}

/// Unknown-key warnings go to stderr even in JSON mode; stdout stays NDJSON.
fn report_config(ui: &UiContext, loaded: &LoadedConfig) {
    if ui.verbosity >= Verbosity::Normal {
        for warning in &loaded.warnings {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                format_warning(warning)
            );
        }
    }

    if ui.shows(Verbosity::Debug) {
        eprintln!(
            "{} config: {}",
            Icon::Arrow.colored(ui.color, ui.unicode),
            loaded.source
        );
    }
}

fn format_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut message = format!("unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    message
}

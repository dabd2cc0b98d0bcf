//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, -C, --config, --token) are inherited by all subcommands
//! - Running without a subcommand builds, like a bare `make`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ojdrive - build driver and online judge client
#[derive(Parser, Debug)]
#[command(name = "ojdrive")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'ojdrive' without arguments to build solution.cpp into ./code.")]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Run as if started in DIR
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Use this config file instead of ojdrive.toml / the user config
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Judge access token
    #[arg(long, env = "ACMOJ_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Compile the solution into the artifact if it is out of date
    Build {
        /// Rebuild even if the artifact is up to date
        #[arg(short = 'B', long)]
        force: bool,

        /// Print the compiler command without running it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Remove the compiled artifact (no error if it is absent)
    Clean,

    /// Submit a solution to the online judge
    Submit {
        /// Problem ID
        #[arg(long)]
        problem_id: u64,

        /// Language (e.g., cpp, python, git)
        #[arg(long)]
        language: String,

        /// Path to the code file
        #[arg(long, value_name = "PATH")]
        code_file: Option<PathBuf>,

        /// Git repository URL (use with --language git)
        #[arg(long, value_name = "URL")]
        git_url: Option<String>,
    },

    /// Check the status of a submission
    Status {
        /// Submission ID
        #[arg(long)]
        submission_id: u64,
    },
}

impl Commands {
    /// Command name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build { .. } => "build",
            Commands::Clean => "clean",
            Commands::Submit { .. } => "submit",
            Commands::Status { .. } => "status",
        }
    }
}

impl Cli {
    /// The subcommand to run; a bare invocation builds.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Build {
            force: false,
            dry_run: false,
        })
    }
}

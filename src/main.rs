//! ojdrive CLI - build driver and online judge client
//!
//! Usage: ojdrive [COMMAND]
//!
//! Commands:
//!   build   Compile solution.cpp into ./code if it is out of date (default)
//!   clean   Remove ./code
//!   submit  Submit a solution to the online judge
//!   status  Check the status of a submission

use clap::Parser;

use ojdrive::config::Config;
use ojdrive::presentation::{Cli, Commands};
use ojdrive::OjError;

use crate::commands::Session;
use crate::ui::context::UiContext;

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();
    let command = cli.command_or_default();

    let (ctx, result) = match Session::open(&cli) {
        Ok(session) => (session.ui, run(&session, &cli, &command)),
        // Without a loaded config, only the flags and the terminal decide.
        Err(err) => (
            UiContext::new(cli.json, cli.verbose, cli.color, &Config::default()),
            Err(err),
        ),
    };

    if let Err(err) = result {
        ui::error::print_error(&err, &ctx, command.name());
        std::process::exit(exit_code(&err));
    }
}

fn run(session: &Session, cli: &Cli, command: &Commands) -> anyhow::Result<()> {
    let token = cli.token.as_deref();

    match command {
        Commands::Build { force, dry_run } => {
            commands::build::cmd_build(session, *force, *dry_run)
        }
        Commands::Clean => commands::clean::cmd_clean(session),
        Commands::Submit {
            problem_id,
            language,
            code_file,
            git_url,
        } => commands::submit::cmd_submit(
            session,
            token,
            *problem_id,
            language,
            code_file.clone(),
            git_url.clone(),
        ),
        Commands::Status { submission_id } => {
            commands::status::cmd_status(session, token, *submission_id)
        }
    }
}

/// Build failures propagate the compiler's status; everything else is 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<OjError>()
        .map(OjError::exit_code)
        .unwrap_or(1)
}

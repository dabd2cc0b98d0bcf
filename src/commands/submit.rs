//! Submit command handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use ojdrive::domain::value_objects::SubmissionSource;
use ojdrive::presentation::factory::create_submit_use_case;

use crate::commands::Session;
use crate::ui::json::{emit_event, events::JudgeResponseEvent, events::StartEvent};

/// Submit a code file or git URL and print the judge's JSON response.
pub fn cmd_submit(
    session: &Session,
    cli_token: Option<&str>,
    problem_id: u64,
    language: &str,
    code_file: Option<PathBuf>,
    git_url: Option<String>,
) -> Result<()> {
    let token = session.token(cli_token)?;

    let both = code_file.is_some() && git_url.is_some();
    let Some(source) = SubmissionSource::from_options(code_file, git_url) else {
        if both {
            bail!("cannot use both --code-file and --git-url at the same time");
        }
        bail!("either --code-file or --git-url must be provided");
    };

    if session.ui.json {
        emit_event(&StartEvent::new("submit"))?;
    }

    let use_case = create_submit_use_case(&session.config.judge, &token)?;
    let response = use_case.execute(&session.root, problem_id, language, &source)?;

    if session.ui.json {
        emit_event(&JudgeResponseEvent::new("submit", &response))?;
    } else {
        println!("{}", serde_json::to_string(&response)?);
    }

    Ok(())
}

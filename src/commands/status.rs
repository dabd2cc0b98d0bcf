//! Status command handler

use anyhow::Result;

use ojdrive::presentation::factory::create_status_use_case;

use crate::commands::Session;
use crate::ui::json::{emit_event, events::JudgeResponseEvent, events::StartEvent};

/// Fetch a submission's details and print the judge's JSON response.
pub fn cmd_status(session: &Session, cli_token: Option<&str>, submission_id: u64) -> Result<()> {
    let token = session.token(cli_token)?;

    if session.ui.json {
        emit_event(&StartEvent::new("status"))?;
    }

    let response = create_status_use_case(&session.config.judge, &token)?.execute(submission_id)?;

    if session.ui.json {
        emit_event(&JudgeResponseEvent::new("status", &response))?;
    } else {
        println!("{}", serde_json::to_string(&response)?);
    }

    Ok(())
}

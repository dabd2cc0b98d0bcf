//! Clean command handler
//!
//! Removes the build artifact. An absent artifact is not an error.

use anyhow::Result;

use ojdrive::config::Verbosity;
use ojdrive::presentation::factory::create_clean_use_case;

use crate::commands::Session;
use crate::ui::json::{emit_event, events::CleanCompleteEvent, events::StartEvent};
use crate::ui::theme::Icon;

pub fn cmd_clean(session: &Session) -> Result<()> {
    let ui = session.ui;
    if ui.json {
        emit_event(&StartEvent::new("clean"))?;
    }

    let recipe = session.config.build.recipe();
    let result = create_clean_use_case().execute(&session.root, &recipe)?;

    if ui.json {
        emit_event(&CleanCompleteEvent::from_result(&result))?;
    } else if ui.shows(Verbosity::Verbose) {
        if result.removed {
            eprintln!(
                "{} Removed {}",
                Icon::Trash.colored(ui.color, ui.unicode),
                result.artifact.display()
            );
        } else {
            eprintln!("Nothing to clean ({} not found)", result.artifact.display());
        }
    }

    Ok(())
}

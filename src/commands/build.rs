//! Build command handler

use anyhow::Result;

use ojdrive::domain::ports::OutputMode;
use ojdrive::presentation::factory::create_build_use_case;
use ojdrive::{BuildOptions, BuildStatus};

use crate::commands::Session;
use crate::ui::build_sink::ConsoleBuildSink;
use crate::ui::json::{emit_event, events::BuildResultEvent, events::StartEvent};

/// Compile the configured source into the artifact if it is out of date.
///
/// In JSON mode compiler output is captured and reported in events;
/// otherwise it streams straight to the terminal.
pub fn cmd_build(session: &Session, force: bool, dry_run: bool) -> Result<()> {
    let ui = session.ui;
    if ui.json {
        emit_event(&StartEvent::new("build"))?;
    }

    let recipe = session.config.build.recipe();
    let output_mode = if ui.json {
        OutputMode::Capture
    } else {
        OutputMode::Inherit
    };
    let options = BuildOptions::new()
        .with_force(force)
        .with_dry_run(dry_run)
        .with_output_mode(output_mode);

    let use_case = create_build_use_case();
    let result = if ui.json {
        use_case.execute(&session.root, &recipe, &options)?
    } else {
        let sink = ConsoleBuildSink::new(ui);
        use_case.execute_with_events(&session.root, &recipe, &options, &sink)?
    };

    if ui.json {
        emit_event(&BuildResultEvent::from_result(&result))?;
    } else if result.status == BuildStatus::DryRun {
        println!("{}", result.command);
    }

    Ok(())
}

//! Verbosity-gated console reporting of build progress.

use ojdrive::config::Verbosity;
use ojdrive::domain::ports::{BuildEvent, BuildEventSink};

use crate::ui::context::UiContext;
use crate::ui::theme::{dim, Icon};

/// Prints build events to stderr according to the UI verbosity.
///
/// Normal verbosity is silent so that only the compiler's own output
/// reaches the terminal.
pub struct ConsoleBuildSink {
    ui: UiContext,
}

impl ConsoleBuildSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn render(&self, event: &BuildEvent) -> Option<String> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            BuildEvent::FreshnessChecked {
                source,
                artifact,
                freshness,
            } if self.ui.shows(Verbosity::Debug) => Some(format!(
                "{} {} is {} ({} -> {})",
                Icon::Arrow.colored(color, unicode),
                artifact.display(),
                freshness,
                source.display(),
                artifact.display()
            )),
            BuildEvent::CompileStarted { command } if self.ui.shows(Verbosity::Verbose) => {
                Some(format!("{} {}", Icon::Build.colored(color, unicode), command))
            }
            BuildEvent::Skipped { artifact } if self.ui.shows(Verbosity::Verbose) => Some(
                format!("'{}' is up to date.", artifact.display()),
            ),
            BuildEvent::Completed { artifact, elapsed } if self.ui.shows(Verbosity::Verbose) => {
                Some(format!(
                    "{} Built {} {}",
                    Icon::Success.colored(color, unicode),
                    artifact.display(),
                    dim(&format!("({:.2}s)", elapsed.as_secs_f64()), color)
                ))
            }
            _ => None,
        }
    }
}

impl BuildEventSink for ConsoleBuildSink {
    fn on_event(&self, event: BuildEvent) {
        if let Some(line) = self.render(&event) {
            eprintln!("{}", line);
        }
    }
}

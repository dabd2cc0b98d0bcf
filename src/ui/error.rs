use ojdrive::OjError;

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::context::UiContext;
use crate::ui::theme::{dim, Icon};

/// Human-readable rendering of a command failure.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    );

    let arrow = Icon::Arrow.render(supports_unicode);
    match err.downcast_ref::<OjError>() {
        Some(OjError::BuildFailure {
            diagnostics: Some(diagnostics),
            ..
        }) => {
            out.push_str(diagnostics);
            if !diagnostics.ends_with('\n') {
                out.push('\n');
            }
        }
        Some(OjError::ApiRequest {
            body: Some(body), ..
        }) => {
            out.push_str(&format!("  Response text: {}\n", body));
        }
        Some(OjError::CompilerNotFound { .. }) => {
            let hint = format!(
                "  {} install it or set `compiler` under [build] in ojdrive.toml\n",
                arrow
            );
            out.push_str(&dim(&hint, supports_color));
        }
        Some(OjError::SourceNotFound { .. }) => {
            let hint = format!(
                "  {} run ojdrive where the source lives, or pass -C <DIR>\n",
                arrow
            );
            out.push_str(&dim(&hint, supports_color));
        }
        _ => {}
    }

    out
}

/// Report a failed command on stderr, or as a JSON `error` event.
pub fn print_error(err: &anyhow::Error, ctx: &UiContext, command: &str) {
    if ctx.json {
        let _ = emit_event(&ErrorEvent::new(command, err));
        return;
    }

    eprint!("{}", format_error(err, ctx.color, ctx.unicode));
}

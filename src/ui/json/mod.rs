//! JSON output utilities for CLI commands.
//!
//! Every `--json` run writes NDJSON (one object per line) to stdout:
//! a `start` event, then command-specific events, or an `error` event.
//!
//! ```ignore
//! use crate::ui::json::{emit_event, events::*};
//!
//! emit_event(&StartEvent::new("build"))?;
//! emit_event(&BuildResultEvent::from_result(&result))?;
//! ```

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Emit a typed event to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let value = serde_json::to_value(event).map_err(io::Error::other)?;
    let mut out = io::stdout().lock();
    write_event(&mut out, &value)
}

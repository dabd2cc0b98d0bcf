//! Process-backed compiler runner
//!
//! Spawns the compiler with `std::process::Command` and waits for it.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{CompileOutput, CompilerError, CompilerRunner, OutputMode};
use crate::domain::value_objects::Invocation;

/// Runs the configured compiler as a child process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCompiler;

impl ProcessCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Check if a program is installed and runs `--version` successfully
    pub fn check_available(program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl CompilerRunner for ProcessCompiler {
    fn run(
        &self,
        invocation: &Invocation,
        working_dir: &Path,
        mode: OutputMode,
    ) -> Result<CompileOutput, CompilerError> {
        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.args())
            .current_dir(working_dir)
            .stdin(Stdio::null());

        let spawn_error = |e: std::io::Error| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CompilerError::NotFound(invocation.program().to_string())
            } else {
                CompilerError::Spawn {
                    program: invocation.program().to_string(),
                    source: e,
                }
            }
        };

        match mode {
            OutputMode::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_error)?;

                Ok(CompileOutput {
                    success: status.success(),
                    code: status.code(),
                    diagnostics: None,
                })
            }
            OutputMode::Capture => {
                let output = cmd.output().map_err(spawn_error)?;

                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));

                Ok(CompileOutput {
                    success: output.status.success(),
                    code: output.status.code(),
                    diagnostics: (!text.is_empty()).then_some(text),
                })
            }
        }
    }
}

//! Build Use Case
//!
//! Orchestrates the compile of a single source file.

use std::path::Path;
use std::time::Instant;

use crate::domain::entities::BuildRecipe;
use crate::domain::ports::{BuildEvent, BuildEventSink, CompilerRunner, FileSystem, NoopEventSink};
use crate::domain::value_objects::Freshness;
use crate::error::{OjError, OjResult};

use super::options::BuildOptions;
use super::result::{BuildResult, BuildStatus};

/// Build use case - compiles the source into the artifact when needed
pub struct BuildUseCase<FS, CR>
where
    FS: FileSystem,
    CR: CompilerRunner,
{
    fs: FS,
    compiler: CR,
}

impl<FS, CR> BuildUseCase<FS, CR>
where
    FS: FileSystem,
    CR: CompilerRunner,
{
    /// Create a new build use case
    pub fn new(fs: FS, compiler: CR) -> Self {
        Self { fs, compiler }
    }

    /// Build without reporting progress
    pub fn execute(
        &self,
        root: &Path,
        recipe: &BuildRecipe,
        options: &BuildOptions,
    ) -> OjResult<BuildResult> {
        self.execute_with_events(root, recipe, options, &NoopEventSink)
    }

    /// Build, reporting progress to `events`.
    ///
    /// `root` is the directory the recipe's relative paths and the compiler
    /// process are anchored in. The artifact is only ever replaced by a
    /// rename after the compiler exits successfully.
    pub fn execute_with_events(
        &self,
        root: &Path,
        recipe: &BuildRecipe,
        options: &BuildOptions,
        events: &dyn BuildEventSink,
    ) -> OjResult<BuildResult> {
        let started = Instant::now();
        let source = recipe.source_in(root);
        let artifact = recipe.output_in(root);

        let source_time = self
            .fs
            .modified(&source)?
            .ok_or_else(|| OjError::SourceNotFound {
                path: recipe.source.clone(),
            })?;
        let artifact_time = self.fs.modified(&artifact)?;
        let freshness = Freshness::from_times(source_time, artifact_time);

        events.on_event(BuildEvent::FreshnessChecked {
            source: recipe.source.clone(),
            artifact: recipe.output.clone(),
            freshness,
        });

        let command = recipe.invocation().to_string();
        let finish = |status: BuildStatus| BuildResult {
            status,
            freshness,
            artifact: recipe.output.clone(),
            command: command.clone(),
            elapsed: started.elapsed(),
            diagnostics: None,
        };

        if !options.force && !freshness.needs_build() {
            events.on_event(BuildEvent::Skipped {
                artifact: recipe.output.clone(),
            });
            return Ok(finish(BuildStatus::UpToDate));
        }

        if options.dry_run {
            return Ok(finish(BuildStatus::DryRun));
        }

        let file_name = artifact.file_name().ok_or_else(|| {
            OjError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("output path has no file name: {}", recipe.output.display()),
            ))
        })?;
        let artifact_dir = match artifact.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => root,
        };

        let staging = self.fs.staging_dir(artifact_dir)?;
        let staged = staging.as_ref().join(file_name);
        let staged_arg = staged.strip_prefix(root).unwrap_or(&staged);
        let invocation = recipe.invocation_writing_to(staged_arg);

        events.on_event(BuildEvent::CompileStarted {
            command: command.clone(),
        });

        let output = self.compiler.run(&invocation, root, options.output_mode)?;
        if !output.success {
            return Err(OjError::BuildFailure {
                command: command.clone(),
                code: output.code,
                diagnostics: output.diagnostics,
            });
        }

        self.fs.rename(&staged, &artifact)?;
        drop(staging);

        let result = BuildResult {
            diagnostics: output.diagnostics,
            ..finish(BuildStatus::Built)
        };
        events.on_event(BuildEvent::Completed {
            artifact: recipe.output.clone(),
            elapsed: result.elapsed,
        });
        Ok(result)
    }
}

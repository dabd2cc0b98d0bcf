//! Clean Use Case
//!
//! Orchestrates artifact removal.

use std::path::Path;

use crate::domain::entities::BuildRecipe;
use crate::domain::ports::{FileSystem, FsError};
use crate::error::OjResult;

use super::result::CleanResult;

/// Clean use case - removes the recipe's artifact
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Delete the artifact if it exists.
    ///
    /// A file that vanishes between the existence check and the delete is
    /// treated as already clean.
    pub fn execute(&self, root: &Path, recipe: &BuildRecipe) -> OjResult<CleanResult> {
        let artifact = recipe.output_in(root);

        if !self.fs.exists(&artifact) {
            return Ok(CleanResult::already_clean(recipe.output.clone()));
        }

        match self.fs.remove(&artifact) {
            Ok(()) => Ok(CleanResult::removed(recipe.output.clone())),
            Err(FsError::NotFound(_)) => Ok(CleanResult::already_clean(recipe.output.clone())),
            Err(e) => Err(e.into()),
        }
    }
}

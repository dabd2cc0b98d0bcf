//! Domain Entities

mod recipe;

pub use recipe::{BuildRecipe, DEFAULT_COMPILER, DEFAULT_FLAGS, DEFAULT_OUTPUT, DEFAULT_SOURCE};

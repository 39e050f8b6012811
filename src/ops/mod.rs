//! High-level operations.
//!
//! This module contains the implementation of the recipe commands.

pub mod recipe_build;
pub mod resolve_settings;

pub use recipe_build::{build, inspect, BuildOptions, BuildResult, RecipeInfo};
pub use resolve_settings::{apply_overrides, resolve_config, ResolvedConfig, SettingsRequest};

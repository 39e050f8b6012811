//! Core data structures for the recipe.
//!
//! - Build settings and their validation
//! - Dependency declarations and options
//! - Folder layout and package ids

pub mod dependency;
pub mod errors;
pub mod layout;
pub mod options;
pub mod package_id;
pub mod recipe;
pub mod settings;

pub use dependency::DependencySpec;
pub use errors::{BuildError, ConfigurationError, RecipeError};
pub use layout::LayoutDescriptor;
pub use options::OptionSet;
pub use package_id::PackageId;
pub use recipe::{Recipe, RecipeState};
pub use settings::BuildSettings;

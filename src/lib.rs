//! webrtc-recipe - build recipe for the WebRTC example application
//!
//! The recipe validates build settings, declares its `webrtc/7151`
//! requirement, and hands configure/build to CMake.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test doubles for unit tests.
///
/// Only compiled for tests. Provides a recording orchestrator and
/// project fixtures.
#[cfg(test)]
pub mod test_support;

pub use core::{
    dependency::DependencySpec, errors::RecipeError, layout::LayoutDescriptor,
    options::OptionSet, recipe::Recipe, settings::BuildSettings,
};

pub use builder::{BuildOrchestrator, CMakeOrchestrator};

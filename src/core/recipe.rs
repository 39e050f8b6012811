//! The WebRTC example recipe.
//!
//! A recipe gates the build on an allowed set of build types, declares the
//! packages it needs, and hands the configure/build sequence to an external
//! tool. It owns none of the heavy lifting.
//!
//! ```text
//! Unvalidated --validate--> Validated --build--> Built
//!      |                         |
//!      +--------------> Rejected +-------------> Failed
//! ```

use std::fmt;

use crate::builder::context::BuildContext;
use crate::builder::orchestrator::BuildOrchestrator;
use crate::core::dependency::DependencySpec;
use crate::core::errors::{BuildError, ConfigurationError, RecipeError, ALLOWED_BUILD_TYPES};
use crate::core::layout::LayoutDescriptor;
use crate::core::options::OptionSet;
use crate::core::settings::BuildSettings;

/// Name of the single package this recipe requires.
pub const WEBRTC_PACKAGE: &str = "webrtc";

/// Pinned WebRTC milestone.
pub const WEBRTC_VERSION: &str = "7151";

/// Check that `settings.build_type` is one of the allowed build types.
///
/// Matching is exact and case-sensitive.
pub fn validate(settings: &BuildSettings) -> Result<(), ConfigurationError> {
    if ALLOWED_BUILD_TYPES.contains(&settings.build_type.as_str()) {
        Ok(())
    } else {
        Err(ConfigurationError::new(settings.build_type.clone()))
    }
}

/// The packages this recipe depends on.
pub fn requirements() -> Vec<DependencySpec> {
    vec![DependencySpec::new(WEBRTC_PACKAGE, WEBRTC_VERSION)]
}

/// Options this recipe sets on its requirements.
///
/// Nothing is toggled; the webrtc package defaults apply.
pub fn configure_options(_settings: &BuildSettings) -> OptionSet {
    OptionSet::empty()
}

/// Folder layout for the given settings.
pub fn layout(settings: &BuildSettings, generator: Option<&str>) -> LayoutDescriptor {
    LayoutDescriptor::cmake(settings, generator)
}

/// Run configure then build on the orchestrator.
///
/// A configure failure stops the sequence. Errors are returned as the tool
/// reported them.
pub fn build<O>(ctx: &BuildContext, orchestrator: &mut O) -> Result<(), BuildError>
where
    O: BuildOrchestrator + ?Sized,
{
    tracing::info!("Configuring with {}", orchestrator.name());
    orchestrator.configure(ctx)?;

    tracing::info!("Building with {}", orchestrator.name());
    orchestrator.build(ctx)?;

    Ok(())
}

/// Where a recipe is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeState {
    Unvalidated,
    Validated,
    Rejected,
    Built,
    Failed,
}

impl fmt::Display for RecipeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecipeState::Unvalidated => "unvalidated",
            RecipeState::Validated => "validated",
            RecipeState::Rejected => "rejected",
            RecipeState::Built => "built",
            RecipeState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A recipe bound to one set of settings.
#[derive(Debug, Clone)]
pub struct Recipe {
    settings: BuildSettings,
    state: RecipeState,
}

impl Recipe {
    pub fn new(settings: BuildSettings) -> Self {
        Recipe {
            settings,
            state: RecipeState::Unvalidated,
        }
    }

    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    pub fn state(&self) -> RecipeState {
        self.state
    }

    /// Validate the settings, moving to `Validated` or `Rejected`.
    pub fn validate(&mut self) -> Result<(), ConfigurationError> {
        match validate(&self.settings) {
            Ok(()) => {
                tracing::debug!("settings accepted: {}", self.settings);
                self.state = RecipeState::Validated;
                Ok(())
            }
            Err(e) => {
                tracing::debug!("settings rejected: {}", self.settings);
                self.state = RecipeState::Rejected;
                Err(e)
            }
        }
    }

    pub fn requirements(&self) -> Vec<DependencySpec> {
        requirements()
    }

    pub fn configure_options(&self) -> OptionSet {
        configure_options(&self.settings)
    }

    pub fn layout(&self, generator: Option<&str>) -> LayoutDescriptor {
        layout(&self.settings, generator)
    }

    /// Dispatch to the orchestrator.
    ///
    /// Refused without touching the orchestrator unless the recipe is
    /// `Validated`.
    pub fn build<O>(&mut self, ctx: &BuildContext, orchestrator: &mut O) -> Result<(), RecipeError>
    where
        O: BuildOrchestrator + ?Sized,
    {
        if self.state != RecipeState::Validated {
            return Err(RecipeError::NotValidated {
                state: self.state.to_string(),
            });
        }

        match build(ctx, orchestrator) {
            Ok(()) => {
                self.state = RecipeState::Built;
                Ok(())
            }
            Err(e) => {
                self.state = RecipeState::Failed;
                Err(e.into())
            }
        }
    }
}

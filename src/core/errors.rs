//! Recipe error types and diagnostics.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::builder::orchestrator::BuildPhase;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// The build types the recipe accepts.
pub const ALLOWED_BUILD_TYPES: &[&str] = &["Debug", "RelWithDebInfo"];

/// A build type outside the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
#[error(
    "build type `{rejected}` is not supported; only {} are allowed",
    ALLOWED_BUILD_TYPES.join(", ")
)]
#[diagnostic(
    code(webrtc_recipe::validate::build_type),
    help("pass `-s build_type=Debug` or `-s build_type=RelWithDebInfo`")
)]
pub struct ConfigurationError {
    /// The value that was rejected, verbatim
    pub rejected: String,

    /// Profile file the value came from, if any
    pub origin: Option<PathBuf>,
}

impl ConfigurationError {
    pub fn new(rejected: impl Into<String>) -> Self {
        ConfigurationError {
            rejected: rejected.into(),
            origin: None,
        }
    }

    /// Record the profile that supplied the rejected value.
    pub fn with_origin(mut self, origin: Option<PathBuf>) -> Self {
        self.origin = origin;
        self
    }

    /// The allowed set, for callers that render their own message.
    pub fn allowed(&self) -> &'static [&'static str] {
        ALLOWED_BUILD_TYPES
    }
}

/// Failure reported by the external build tool.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("`{tool}` not found in PATH")]
    ToolNotFound { tool: String },

    #[error("{phase} failed: `{command}` exited with {status}\n{stderr}")]
    PhaseFailed {
        phase: BuildPhase,
        command: String,
        status: String,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

impl BuildError {
    /// The phase that failed, when the tool got far enough to run.
    pub fn phase(&self) -> Option<BuildPhase> {
        match self {
            BuildError::PhaseFailed { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

/// Any failure of a recipe run.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("recipe must be validated before building (state: {state})")]
    NotValidated { state: String },
}

impl RecipeError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RecipeError::Configuration(err) => {
                let mut diag = Diagnostic::error(err.to_string()).with_context(format!(
                    "allowed build types: {}",
                    err.allowed().join(", ")
                ));
                if let Some(code) = MietteDiagnostic::code(err) {
                    diag = diag.with_context(format!("code: {}", code));
                }
                if let Some(ref origin) = err.origin {
                    diag = diag.with_location(origin);
                }
                diag.with_suggestion(suggestions::SET_BUILD_TYPE)
                    .with_suggestion(suggestions::EDIT_PROFILE)
            }

            RecipeError::Build(BuildError::ToolNotFound { tool }) => {
                Diagnostic::error(format!("`{}` is required but was not found", tool))
                    .with_suggestion(suggestions::INSTALL_CMAKE)
            }

            RecipeError::Build(err @ BuildError::PhaseFailed { .. }) => {
                Diagnostic::error(err.to_string()).with_suggestion(suggestions::BUILD_FAILED)
            }

            RecipeError::Build(err) => Diagnostic::error(format!("{:#}", err)),

            RecipeError::NotValidated { .. } => Diagnostic::error(self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_names_value_and_allowed_set() {
        let err = ConfigurationError::new("MinSizeRel");
        let msg = err.to_string();

        assert!(msg.contains("`MinSizeRel`"));
        assert!(msg.contains("Debug, RelWithDebInfo"));
    }

    #[test]
    fn test_configuration_diagnostic() {
        let err = RecipeError::from(ConfigurationError::new("Release"));
        let output = err.to_diagnostic().format(false);

        assert!(output.contains("error: build type `Release` is not supported"));
        assert!(!output.contains("-->"));
        assert!(output.contains("allowed build types: Debug, RelWithDebInfo"));
        assert!(output.contains("code: webrtc_recipe::validate::build_type"));
        assert!(output.contains("help: consider:"));
    }

    #[test]
    fn test_configuration_diagnostic_points_at_profile() {
        let err = RecipeError::from(
            ConfigurationError::new("Release")
                .with_origin(Some(PathBuf::from("/home/me/.webrtc-recipe/profiles/default.toml"))),
        );
        let output = err.to_diagnostic().format(false);

        assert!(output.contains("--> /home/me/.webrtc-recipe/profiles/default.toml"));
    }

    #[test]
    fn test_phase_failed_keeps_tool_output() {
        let err = BuildError::PhaseFailed {
            phase: BuildPhase::Configure,
            command: "cmake -S . -B build".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "CMake Error: could not find webrtc".to_string(),
        };

        assert_eq!(err.phase(), Some(BuildPhase::Configure));
        assert!(err.to_string().contains("CMake Error: could not find webrtc"));
    }
}

//! The seam between the recipe and the external build tool.

use std::fmt;

use serde::Serialize;

use crate::builder::context::BuildContext;
use crate::core::errors::BuildError;

/// The two phases of a delegated build, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildPhase {
    /// Generate toolchain files and configure the build tree
    Configure,
    /// Compile and link
    Build,
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildPhase::Configure => write!(f, "configure"),
            BuildPhase::Build => write!(f, "build"),
        }
    }
}

/// An external build-orchestration tool.
///
/// Implementations own everything past dispatch: toolchain generation,
/// dependency lookup, compiling. Their errors reach the caller unchanged.
pub trait BuildOrchestrator {
    /// Tool name, for logs.
    fn name(&self) -> &str;

    /// Generate configuration artifacts and configure the build tree.
    fn configure(&mut self, ctx: &BuildContext) -> Result<(), BuildError>;

    /// Compile the configured tree.
    fn build(&mut self, ctx: &BuildContext) -> Result<(), BuildError>;
}

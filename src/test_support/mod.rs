//! Test doubles for recipe unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use webrtc_recipe::test_support::RecordingOrchestrator;
//!
//! let mut orch = RecordingOrchestrator::new().fail_on(BuildPhase::Configure);
//! // hand `orch` to the recipe, then inspect `orch.calls()`
//! ```

pub mod fixtures;

use crate::builder::context::BuildContext;
use crate::builder::orchestrator::{BuildOrchestrator, BuildPhase};
use crate::core::errors::BuildError;

pub use fixtures::*;

/// Orchestrator that records the phases it was asked to run.
///
/// Can be told to fail a phase, in which case it reports a
/// `BuildError::PhaseFailed` the way a real tool would.
#[derive(Debug, Default)]
pub struct RecordingOrchestrator {
    calls: Vec<BuildPhase>,
    fail_on: Option<BuildPhase>,
}

impl RecordingOrchestrator {
    /// Stderr reported by a scripted failure.
    pub const FAILURE_STDERR: &'static str = "scripted failure";

    pub fn new() -> Self {
        RecordingOrchestrator::default()
    }

    /// Fail when `phase` is invoked.
    pub fn fail_on(mut self, phase: BuildPhase) -> Self {
        self.fail_on = Some(phase);
        self
    }

    /// Phases invoked so far, in order.
    pub fn calls(&self) -> &[BuildPhase] {
        &self.calls
    }

    fn record(&mut self, phase: BuildPhase) -> Result<(), BuildError> {
        self.calls.push(phase);
        if self.fail_on == Some(phase) {
            return Err(BuildError::PhaseFailed {
                phase,
                command: format!("recording {}", phase),
                status: "exit status: 1".to_string(),
                stderr: Self::FAILURE_STDERR.to_string(),
            });
        }
        Ok(())
    }
}

impl BuildOrchestrator for RecordingOrchestrator {
    fn name(&self) -> &str {
        "recording"
    }

    fn configure(&mut self, _ctx: &BuildContext) -> Result<(), BuildError> {
        self.record(BuildPhase::Configure)
    }

    fn build(&mut self, _ctx: &BuildContext) -> Result<(), BuildError> {
        self.record(BuildPhase::Build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::BuildSettings;

    #[test]
    fn test_recording_orchestrator_scripted_failure() {
        let settings = BuildSettings::new("Linux", "gcc", "Debug", "x86_64");
        let ctx = debug_context(&settings, "/tmp/p");
        let mut orch = RecordingOrchestrator::new().fail_on(BuildPhase::Build);

        assert!(orch.configure(&ctx).is_ok());
        let err = orch.build(&ctx).unwrap_err();

        assert_eq!(err.phase(), Some(BuildPhase::Build));
        assert_eq!(orch.calls(), &[BuildPhase::Configure, BuildPhase::Build]);
    }
}

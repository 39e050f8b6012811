//! Dispatch to the external build tool.
//!
//! The recipe talks to a [`BuildOrchestrator`]; [`CMakeOrchestrator`] is the
//! real one.

pub mod cmake;
pub mod context;
pub mod deps;
pub mod orchestrator;
pub mod toolchain;

pub use cmake::CMakeOrchestrator;
pub use context::BuildContext;
pub use orchestrator::{BuildOrchestrator, BuildPhase};

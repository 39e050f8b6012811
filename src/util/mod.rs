//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod fs;
pub mod hash;
pub mod process;

pub use config::Profile;
pub use diagnostic::Diagnostic;

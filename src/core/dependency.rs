//! Dependency declarations.
//!
//! A recipe declares what it needs as `name/version` references. Locating and
//! materializing the package is left to the external package tool.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named, versioned package requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencySpec {
    /// Package name
    pub name: String,

    /// Exact version, in whatever scheme the package uses (WebRTC uses
    /// milestone branch numbers, not semver)
    pub version: String,
}

impl DependencySpec {
    /// Create a new dependency spec.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        DependencySpec {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The `name/version` reference string.
    pub fn reference(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

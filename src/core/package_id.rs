//! Package id - which binary configuration a build produces.
//!
//! Two builds with the same settings, options, and requirements share an id;
//! changing any of them changes it.

use std::fmt;

use serde::Serialize;

use crate::core::dependency::DependencySpec;
use crate::core::options::OptionSet;
use crate::core::settings::{BuildSettings, SETTING_NAMES};
use crate::util::hash::Fingerprint;

/// A stable digest of a build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    /// Compute the id for a configuration.
    pub fn compute(
        settings: &BuildSettings,
        options: &OptionSet,
        requirements: &[DependencySpec],
    ) -> Self {
        let mut fp = Fingerprint::new();

        fp.section("settings");
        for name in SETTING_NAMES {
            if let Some(value) = settings.get(name) {
                fp.update_pair(name, value);
            }
        }

        fp.section("options");
        for (name, value) in options.entries() {
            fp.update_pair(name, if value { "True" } else { "False" });
        }

        fp.section("requires");
        let mut refs: Vec<String> = requirements.iter().map(|r| r.reference()).collect();
        refs.sort();
        for r in &refs {
            fp.update_str(r);
        }

        PackageId(fp.finish())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for display.
    pub fn short(&self) -> &str {
        &self.0[..16]
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webrtc() -> Vec<DependencySpec> {
        vec![DependencySpec::new("webrtc", "7151")]
    }

    #[test]
    fn test_same_inputs_same_id() {
        let settings = BuildSettings::new("Linux", "gcc", "Debug", "x86_64");
        let a = PackageId::compute(&settings, &OptionSet::empty(), &webrtc());
        let b = PackageId::compute(&settings.clone(), &OptionSet::empty(), &webrtc());

        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
        assert_eq!(a.short().len(), 16);
    }

    #[test]
    fn test_settings_and_options_change_id() {
        let debug = BuildSettings::new("Linux", "gcc", "Debug", "x86_64");
        let rel = debug.clone().with_build_type("RelWithDebInfo");
        let base = PackageId::compute(&debug, &OptionSet::empty(), &webrtc());

        assert_ne!(base, PackageId::compute(&rel, &OptionSet::empty(), &webrtc()));

        let shared = OptionSet {
            shared: Some(true),
            ..Default::default()
        };
        assert_ne!(base, PackageId::compute(&debug, &shared, &webrtc()));

        let other = vec![DependencySpec::new("webrtc", "7204")];
        assert_ne!(base, PackageId::compute(&debug, &OptionSet::empty(), &other));
    }
}

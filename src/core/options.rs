//! Typed package options for the `webrtc` dependency.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Option names accepted by `-o name=value` and the `[options]` profile table.
pub const OPTION_NAMES: &[&str] = &["shared", "with_h264", "enable_rtti"];

/// Package scopes an `-o scope:name=value` assignment may name.
pub const OPTION_SCOPES: &[&str] = &["webrtc/*", "webrtc", "*"];

/// Options toggled on the `webrtc` dependency.
///
/// `None` leaves the package's own default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionSet {
    /// Link webrtc as a shared library
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,

    /// Include the OpenH264 codec
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_h264: Option<bool>,

    /// Build webrtc with RTTI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_rtti: Option<bool>,
}

impl OptionSet {
    /// An option set with nothing set.
    pub fn empty() -> Self {
        OptionSet::default()
    }

    /// True when no option is set.
    pub fn is_empty(&self) -> bool {
        self.shared.is_none() && self.with_h264.is_none() && self.enable_rtti.is_none()
    }

    /// Combine two option sets; fields set in `other` win.
    pub fn merge(self, other: OptionSet) -> OptionSet {
        OptionSet {
            shared: other.shared.or(self.shared),
            with_h264: other.with_h264.or(self.with_h264),
            enable_rtti: other.enable_rtti.or(self.enable_rtti),
        }
    }

    /// Set a single option.
    pub fn apply(&mut self, assignment: &OptionAssignment) {
        let slot = match assignment.name.as_str() {
            "shared" => &mut self.shared,
            "with_h264" => &mut self.with_h264,
            "enable_rtti" => &mut self.enable_rtti,
            _ => return,
        };
        *slot = Some(assignment.value);
    }

    /// Set options as `(name, value)` pairs, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        [
            ("shared", self.shared),
            ("with_h264", self.with_h264),
            ("enable_rtti", self.enable_rtti),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

/// A `name=value` option override from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAssignment {
    pub name: String,
    pub value: bool,
}

impl FromStr for OptionAssignment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((name, value)) = s.split_once('=') else {
            bail!("invalid option `{}`, expected `name=value`", s);
        };
        let name = match name.split_once(':') {
            Some((scope, name)) => {
                let scope = scope.trim();
                if !OPTION_SCOPES.contains(&scope) {
                    bail!("option scope `{}` does not match `webrtc`", scope);
                }
                name.trim()
            }
            None => name.trim(),
        };

        if !OPTION_NAMES.contains(&name) {
            bail!(
                "unknown option `{}`, expected one of: {}",
                name,
                OPTION_NAMES.join(", ")
            );
        }

        let value = parse_bool(value)
            .with_context(|| format!("invalid value for option `{}`", name))?;

        Ok(OptionAssignment {
            name: name.to_string(),
            value,
        })
    }
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("`{}` is not a boolean", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_other_wins() {
        let base = OptionSet {
            shared: Some(false),
            with_h264: Some(true),
            enable_rtti: None,
        };
        let overlay = OptionSet {
            shared: Some(true),
            ..Default::default()
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.shared, Some(true));
        assert_eq!(merged.with_h264, Some(true));
        assert_eq!(merged.enable_rtti, None);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let set = OptionSet {
            enable_rtti: Some(false),
            ..Default::default()
        };
        assert_eq!(set.merge(OptionSet::empty()), set);
        assert_eq!(OptionSet::empty().merge(set), set);
    }

    #[test]
    fn test_parse_assignment() {
        let a: OptionAssignment = "shared=True".parse().unwrap();
        assert_eq!(a, OptionAssignment { name: "shared".into(), value: true });

        let a: OptionAssignment = "webrtc/*:with_h264=False".parse().unwrap();
        assert_eq!(a.name, "with_h264");
        assert!(!a.value);

        let a: OptionAssignment = "*:shared=0".parse().unwrap();
        assert_eq!(a.name, "shared");
        assert!("shared=maybe".parse::<OptionAssignment>().is_err());
        assert!("fPIC=True".parse::<OptionAssignment>().is_err());
    }

    #[test]
    fn test_foreign_scope_is_rejected() {
        let err = "zlib/*:shared=True".parse::<OptionAssignment>().unwrap_err();
        assert!(err.to_string().contains("`zlib/*` does not match `webrtc`"));

        assert!("webrtc/*:a:shared=True".parse::<OptionAssignment>().is_err());
    }

    #[test]
    fn test_entries_in_order() {
        let mut set = OptionSet::empty();
        assert!(set.is_empty());
        set.apply(&"enable_rtti=0".parse().unwrap());
        set.apply(&"shared=1".parse().unwrap());

        assert_eq!(set.entries(), vec![("shared", true), ("enable_rtti", false)]);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let set: OptionSet = toml::from_str("shared = false\nwith_h264 = true\n").unwrap();
        assert_eq!(set.shared, Some(false));
        assert_eq!(set.with_h264, Some(true));

        assert!(toml::from_str::<OptionSet>("bogus = true\n").is_err());
    }
}

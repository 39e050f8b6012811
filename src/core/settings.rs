//! Build settings: the ambient platform attributes a recipe is evaluated against.
//!
//! Settings are resolved once at the process edge (host detection, then the
//! profile, then `-s key=value` overrides) and handed to every recipe
//! operation as an immutable value. Nothing in the recipe reads the
//! environment on its own.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::util::process::find_executable;

/// Names accepted by `-s key=value` and the `[settings]` profile table.
pub const SETTING_NAMES: &[&str] = &["os", "compiler", "build_type", "arch"];

/// The ambient settings a build is configured for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Operating system (e.g. `Linux`, `Windows`, `Macos`)
    pub os: String,

    /// Compiler identifier (e.g. `gcc`, `clang`, `msvc`)
    pub compiler: String,

    /// Build type (e.g. `Debug`, `RelWithDebInfo`)
    pub build_type: String,

    /// Target architecture (e.g. `x86_64`, `armv8`)
    pub arch: String,
}

impl BuildSettings {
    /// Create settings from explicit values.
    pub fn new(
        os: impl Into<String>,
        compiler: impl Into<String>,
        build_type: impl Into<String>,
        arch: impl Into<String>,
    ) -> Self {
        BuildSettings {
            os: os.into(),
            compiler: compiler.into(),
            build_type: build_type.into(),
            arch: arch.into(),
        }
    }

    /// Detect settings for the host machine.
    ///
    /// The build type defaults to `Release`, matching what a freshly
    /// detected profile carries; callers override it explicitly.
    pub fn detect_host() -> Self {
        BuildSettings {
            os: host_os().to_string(),
            compiler: detect_compiler(),
            build_type: "Release".to_string(),
            arch: host_arch().to_string(),
        }
    }

    /// Return a copy with a different build type.
    pub fn with_build_type(mut self, build_type: impl Into<String>) -> Self {
        self.build_type = build_type.into();
        self
    }

    /// Look up a setting by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "os" => Some(&self.os),
            "compiler" => Some(&self.compiler),
            "build_type" => Some(&self.build_type),
            "arch" => Some(&self.arch),
            _ => None,
        }
    }

    /// Apply a single override.
    pub fn apply(&mut self, assignment: &SettingAssignment) {
        let slot = match assignment.name.as_str() {
            "os" => &mut self.os,
            "compiler" => &mut self.compiler,
            "build_type" => &mut self.build_type,
            "arch" => &mut self.arch,
            // SettingAssignment::from_str rejects anything else
            _ => return,
        };
        *slot = assignment.value.clone();
    }

    /// Apply the fields set in a partial settings table.
    pub fn apply_partial(&mut self, partial: &PartialSettings) {
        if let Some(ref os) = partial.os {
            self.os = os.clone();
        }
        if let Some(ref compiler) = partial.compiler {
            self.compiler = compiler.clone();
        }
        if let Some(ref build_type) = partial.build_type {
            self.build_type = build_type.clone();
        }
        if let Some(ref arch) = partial.arch {
            self.arch = arch.clone();
        }
    }
}

impl fmt::Display for BuildSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "os={} compiler={} build_type={} arch={}",
            self.os, self.compiler, self.build_type, self.arch
        )
    }
}

/// A settings table where every field is optional, as found in profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
}

impl From<&BuildSettings> for PartialSettings {
    fn from(settings: &BuildSettings) -> Self {
        PartialSettings {
            os: Some(settings.os.clone()),
            compiler: Some(settings.compiler.clone()),
            build_type: Some(settings.build_type.clone()),
            arch: Some(settings.arch.clone()),
        }
    }
}

/// A `name=value` settings override from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingAssignment {
    pub name: String,
    pub value: String,
}

impl FromStr for SettingAssignment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((name, value)) = s.split_once('=') else {
            bail!("invalid setting `{}`, expected `name=value`", s);
        };
        let name = name.trim();

        if !SETTING_NAMES.contains(&name) {
            bail!(
                "unknown setting `{}`, expected one of: {}",
                name,
                SETTING_NAMES.join(", ")
            );
        }

        // The value is kept verbatim; validation decides what it accepts.
        Ok(SettingAssignment {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// Host operating system, in recipe naming.
pub fn host_os() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Macos",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "android" => "Android",
        "ios" => "iOS",
        other => other,
    }
}

/// Host architecture, in recipe naming.
pub fn host_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "x86_64",
        "aarch64" => "armv8",
        "x86" => "x86",
        "arm" => "armv7",
        other => other,
    }
}

/// Detect the host compiler.
///
/// `CC` wins when set; otherwise the first compiler found in `PATH`.
fn detect_compiler() -> String {
    if let Ok(cc) = std::env::var("CC") {
        if let Some(name) = compiler_from_command(&cc) {
            return name.to_string();
        }
    }

    let candidates: &[&str] = if cfg!(windows) {
        &["cl", "clang", "gcc"]
    } else {
        &["clang", "gcc", "cc"]
    };

    for candidate in candidates {
        if find_executable(candidate).is_some() {
            if let Some(name) = compiler_from_command(candidate) {
                return name.to_string();
            }
        }
    }

    if cfg!(windows) {
        "msvc".to_string()
    } else {
        "gcc".to_string()
    }
}

/// Map a compiler command (path or name) to its setting value.
pub fn compiler_from_command(command: &str) -> Option<&'static str> {
    let file = std::path::Path::new(command)
        .file_stem()
        .and_then(|s| s.to_str())?
        .to_ascii_lowercase();

    if file == "cl" {
        Some("msvc")
    } else if file.contains("clang") {
        if cfg!(target_os = "macos") {
            Some("apple-clang")
        } else {
            Some("clang")
        }
    } else if file.contains("gcc") || file == "cc" || file.contains("g++") {
        Some("gcc")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        let a: SettingAssignment = "build_type=Debug".parse().unwrap();
        assert_eq!(a.name, "build_type");
        assert_eq!(a.value, "Debug");

        // Empty values are allowed through; validation rejects them later.
        let a: SettingAssignment = "build_type=".parse().unwrap();
        assert_eq!(a.value, "");
    }

    #[test]
    fn test_parse_assignment_errors() {
        let err = "build_type".parse::<SettingAssignment>().unwrap_err();
        assert!(err.to_string().contains("expected `name=value`"));

        let err = "cppstd=17".parse::<SettingAssignment>().unwrap_err();
        assert!(err.to_string().contains("unknown setting `cppstd`"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut settings = BuildSettings::new("Linux", "gcc", "Release", "x86_64");
        settings.apply(&"build_type=Debug".parse().unwrap());
        settings.apply(&"arch=armv8".parse().unwrap());

        assert_eq!(settings.build_type, "Debug");
        assert_eq!(settings.arch, "armv8");
        assert_eq!(settings.get("os"), Some("Linux"));
        assert_eq!(settings.get("nope"), None);
    }

    #[test]
    fn test_apply_partial_only_touches_set_fields() {
        let mut settings = BuildSettings::new("Linux", "gcc", "Release", "x86_64");
        let partial = PartialSettings {
            compiler: Some("clang".to_string()),
            ..Default::default()
        };
        settings.apply_partial(&partial);

        assert_eq!(settings, BuildSettings::new("Linux", "clang", "Release", "x86_64"));
    }

    #[test]
    fn test_detect_host_defaults_to_release() {
        let settings = BuildSettings::detect_host();
        assert_eq!(settings.build_type, "Release");
        assert!(!settings.os.is_empty());
        assert!(!settings.arch.is_empty());
    }

    #[test]
    fn test_compiler_from_command() {
        assert_eq!(compiler_from_command("/usr/bin/gcc-13"), Some("gcc"));
        assert_eq!(compiler_from_command("cl.exe"), Some("msvc"));
        assert_eq!(compiler_from_command("tcc"), None);
    }
}

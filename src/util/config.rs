//! Profile files.
//!
//! A profile is a TOML file with default settings, options, and build conf:
//!
//! ```toml
//! [settings]
//! os = "Linux"
//! compiler = "gcc"
//! build_type = "Debug"
//! arch = "x86_64"
//!
//! [options]
//! shared = false
//!
//! [conf]
//! generator = "Ninja"
//! jobs = 8
//! prefix_path = ["/opt/webrtc"]
//! ```
//!
//! The default profile lives at `~/.webrtc-recipe/profiles/default.toml`
//! (the home can be moved with `WEBRTC_RECIPE_HOME`). A profile given with
//! `--profile` is merged on top of it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::options::OptionSet;
use crate::core::settings::{BuildSettings, PartialSettings};

/// Environment variable overriding the recipe home directory.
pub const HOME_ENV: &str = "WEBRTC_RECIPE_HOME";

/// A settings/options/conf profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub settings: PartialSettings,
    pub options: OptionSet,
    pub conf: BuildConf,
}

/// Build-tool configuration carried by a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConf {
    /// CMake generator (e.g. "Ninja", "Visual Studio 17 2022")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,

    /// Parallel jobs for the compile phase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,

    /// Where installed packages (webrtc) can be found
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefix_path: Vec<PathBuf>,
}

impl Profile {
    /// A profile holding the given settings and nothing else.
    pub fn from_settings(settings: &BuildSettings) -> Self {
        Profile {
            settings: PartialSettings::from(settings),
            ..Default::default()
        }
    }

    /// Load a profile from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse profile: {}", path.display()))
    }

    /// Load a profile, falling back to an empty one if the file doesn't exist
    /// or can't be read.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load profile from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save the profile, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize profile")?;
        crate::util::fs::write_string(path, &contents)
    }

    /// Merge another profile into this one (other takes precedence).
    pub fn merge(&mut self, other: Profile) {
        let s = other.settings;
        if s.os.is_some() {
            self.settings.os = s.os;
        }
        if s.compiler.is_some() {
            self.settings.compiler = s.compiler;
        }
        if s.build_type.is_some() {
            self.settings.build_type = s.build_type;
        }
        if s.arch.is_some() {
            self.settings.arch = s.arch;
        }

        self.options = self.options.merge(other.options);

        if other.conf.generator.is_some() {
            self.conf.generator = other.conf.generator;
        }
        if other.conf.jobs.is_some() {
            self.conf.jobs = other.conf.jobs;
        }
        if !other.conf.prefix_path.is_empty() {
            self.conf.prefix_path = other.conf.prefix_path;
        }
    }
}

/// The recipe home directory.
///
/// An explicit override (usually from `WEBRTC_RECIPE_HOME`) wins over
/// `~/.webrtc-recipe`.
pub fn recipe_home(override_dir: Option<&Path>) -> Option<PathBuf> {
    match override_dir {
        Some(dir) => Some(dir.to_path_buf()),
        None => directories::BaseDirs::new().map(|b| b.home_dir().join(".webrtc-recipe")),
    }
}

/// Path of the default profile under a home directory.
pub fn default_profile_path(home: &Path) -> PathBuf {
    home.join("profiles").join("default.toml")
}

/// Profiles merged in precedence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedProfiles {
    pub profile: Profile,

    /// The file whose `build_type` won, if any profile set one
    pub build_type_origin: Option<PathBuf>,
}

/// Load the default profile, then the explicit one on top.
pub fn load_profiles(
    default_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<LoadedProfiles> {
    let mut loaded = LoadedProfiles::default();

    if let Some(path) = default_path {
        loaded.merge_from(path, Profile::load_or_default(path));
    }

    // An explicitly named profile must exist and parse.
    if let Some(path) = explicit {
        loaded.merge_from(path, Profile::load(path)?);
    }

    Ok(loaded)
}

impl LoadedProfiles {
    fn merge_from(&mut self, path: &Path, profile: Profile) {
        if profile.settings.build_type.is_some() {
            self.build_type_origin = Some(path.to_path_buf());
        }
        self.profile.merge(profile);
    }
}

//! Resolving the settings a command runs with.
//!
//! Precedence, lowest to highest: host detection, the default profile, an
//! explicit `--profile`, then `-s`/`-o` overrides.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::options::{OptionAssignment, OptionSet};
use crate::core::settings::{BuildSettings, SettingAssignment};
use crate::util::config::{load_profiles, BuildConf, LoadedProfiles, Profile};

/// Where settings come from.
#[derive(Debug, Clone, Default)]
pub struct SettingsRequest {
    /// Default profile path (ignored if the file doesn't exist)
    pub default_profile: Option<PathBuf>,

    /// Explicit profile (must exist)
    pub profile: Option<PathBuf>,

    /// `-s name=value` overrides
    pub settings: Vec<SettingAssignment>,

    /// `-o name=value` overrides
    pub options: Vec<OptionAssignment>,
}

/// Fully resolved inputs for a recipe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub settings: BuildSettings,

    /// Options requested by the user, applied on top of the recipe's own
    pub user_options: OptionSet,

    pub conf: BuildConf,

    /// Profile that supplied `build_type`; `None` when detected or set by `-s`
    pub build_type_origin: Option<PathBuf>,
}

/// Load profiles and apply overrides on top of `host`.
pub fn resolve_config(host: BuildSettings, request: &SettingsRequest) -> Result<ResolvedConfig> {
    let LoadedProfiles {
        profile,
        build_type_origin,
    } = load_profiles(request.default_profile.as_deref(), request.profile.as_deref())?;

    let mut config = apply_overrides(host, profile, request);
    if !request.settings.iter().any(|s| s.name == "build_type") {
        config.build_type_origin = build_type_origin;
    }
    Ok(config)
}

/// Combine already-loaded inputs. Pure.
pub fn apply_overrides(
    host: BuildSettings,
    profile: Profile,
    request: &SettingsRequest,
) -> ResolvedConfig {
    let mut settings = host;
    settings.apply_partial(&profile.settings);
    for assignment in &request.settings {
        settings.apply(assignment);
    }

    let mut user_options = profile.options;
    for assignment in &request.options {
        user_options.apply(assignment);
    }

    tracing::debug!("resolved settings: {}", settings);

    ResolvedConfig {
        settings,
        user_options,
        conf: profile.conf,
        build_type_origin: None,
    }
}

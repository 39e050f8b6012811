//! Command implementations

pub mod build;
pub mod completions;
pub mod info;
pub mod layout;
pub mod profile;
pub mod requirements;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::SettingsArgs;
use webrtc_recipe::core::settings::BuildSettings;
use webrtc_recipe::ops::{resolve_config, ResolvedConfig, SettingsRequest};
use webrtc_recipe::util::config::{default_profile_path, recipe_home};

/// Path of the default profile for these arguments.
pub fn default_profile(args: &SettingsArgs) -> Result<PathBuf> {
    let home = recipe_home(args.home.as_deref())
        .context("could not determine the home directory; set WEBRTC_RECIPE_HOME")?;
    Ok(default_profile_path(&home))
}

/// Detect the host, then apply profiles and overrides.
pub fn resolve(args: &SettingsArgs) -> Result<ResolvedConfig> {
    let request = SettingsRequest {
        default_profile: default_profile(args).ok(),
        profile: args.profile.clone(),
        settings: args.settings.clone(),
        options: args.options.clone(),
    };

    resolve_config(BuildSettings::detect_host(), &request)
}

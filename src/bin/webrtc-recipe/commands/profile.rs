//! `webrtc-recipe profile` command

use anyhow::{bail, Result};

use crate::cli::{ProfileArgs, ProfileCommands, ProfileDetectArgs, SettingsArgs};
use webrtc_recipe::core::settings::BuildSettings;
use webrtc_recipe::util::config::Profile;

pub fn execute(settings: &SettingsArgs, args: ProfileArgs) -> Result<()> {
    match args.command {
        ProfileCommands::Detect(detect_args) => detect(settings, detect_args),
        ProfileCommands::Show => show(settings),
        ProfileCommands::Path => {
            println!("{}", super::default_profile(settings)?.display());
            Ok(())
        }
    }
}

fn detect(settings: &SettingsArgs, args: ProfileDetectArgs) -> Result<()> {
    let path = super::default_profile(settings)?;

    if path.exists() && !args.force {
        bail!(
            "profile already exists: {}\n\
             use `--force` to overwrite it",
            path.display()
        );
    }

    let host = BuildSettings::detect_host();
    Profile::from_settings(&host).save(&path)?;

    eprintln!("     Created default profile {}", path.display());
    println!("{}", host);
    if host.build_type == "Release" {
        tracing::warn!(
            "the detected build_type `Release` is not supported by this recipe; \
             edit the profile or pass `-s build_type=Debug`"
        );
    }

    Ok(())
}

fn show(settings: &SettingsArgs) -> Result<()> {
    let config = super::resolve(settings)?;
    let mut profile = Profile::from_settings(&config.settings);
    profile.options = config.user_options;
    profile.conf = config.conf;

    print!("{}", toml::to_string_pretty(&profile)?);
    Ok(())
}

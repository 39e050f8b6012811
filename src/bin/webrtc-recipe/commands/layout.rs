//! `webrtc-recipe layout` command

use anyhow::Result;

use crate::cli::{LayoutArgs, SettingsArgs};
use webrtc_recipe::core::recipe;

pub fn execute(settings: &SettingsArgs, args: LayoutArgs) -> Result<()> {
    let config = super::resolve(settings)?;
    let generator = args.generator.as_deref().or(config.conf.generator.as_deref());
    let layout = recipe::layout(&config.settings, generator);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    println!("source:     {}", layout.source_folder.display());
    println!("build:      {}", layout.build_folder.display());
    println!("generators: {}", layout.generators_folder.display());
    println!(
        "config:     {}",
        if layout.multi_config { "multi" } else { "single" }
    );

    Ok(())
}

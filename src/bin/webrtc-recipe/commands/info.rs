//! `webrtc-recipe info` command

use anyhow::Result;

use crate::cli::{LayoutArgs, SettingsArgs};
use webrtc_recipe::ops::inspect;

pub fn execute(settings: &SettingsArgs, args: LayoutArgs) -> Result<()> {
    let config = super::resolve(settings)?;
    let info = inspect(&config, args.generator.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Settings:");
    println!("  os:         {}", info.settings.os);
    println!("  compiler:   {}", info.settings.compiler);
    let marker = if info.valid { "" } else { " (unsupported)" };
    println!("  build_type: {}{}", info.settings.build_type, marker);
    println!("  arch:       {}", info.settings.arch);
    println!();

    println!("Requirements:");
    for req in &info.requirements {
        println!("  {}", req);
    }
    println!();

    println!("Options:");
    let entries = info.options.entries();
    if entries.is_empty() {
        println!("  (package defaults)");
    }
    for (name, value) in entries {
        println!("  {}={}", name, value);
    }
    println!();

    println!("Layout:");
    println!("  build:      {}", info.layout.build_folder.display());
    println!("  generators: {}", info.layout.generators_folder.display());
    println!();

    println!("Package id: {}", info.package_id);

    Ok(())
}

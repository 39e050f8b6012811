//! `webrtc-recipe validate` command

use anyhow::Result;

use crate::cli::SettingsArgs;
use webrtc_recipe::core::errors::RecipeError;
use webrtc_recipe::core::recipe::Recipe;

pub fn execute(args: &SettingsArgs) -> Result<()> {
    let config = super::resolve(args)?;
    let mut recipe = Recipe::new(config.settings);

    recipe
        .validate()
        .map_err(|e| RecipeError::from(e.with_origin(config.build_type_origin)))?;

    println!("valid: {}", recipe.settings());
    Ok(())
}

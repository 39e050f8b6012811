//! Implementation of `webrtc-recipe build` and `info`.

use std::path::PathBuf;

use serde::Serialize;

use crate::builder::context::BuildContext;
use crate::builder::orchestrator::BuildOrchestrator;
use crate::core::dependency::DependencySpec;
use crate::core::errors::RecipeError;
use crate::core::layout::LayoutDescriptor;
use crate::core::options::OptionSet;
use crate::core::package_id::PackageId;
use crate::core::recipe::Recipe;
use crate::core::settings::BuildSettings;
use crate::ops::resolve_settings::ResolvedConfig;

/// Options for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Project root holding CMakeLists.txt
    pub project_root: PathBuf,

    /// Generator override (CLI beats profile)
    pub generator: Option<String>,

    /// Parallel jobs (CLI beats profile)
    pub jobs: Option<usize>,
}

/// What a successful build produced.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub package_id: PackageId,
    pub layout: LayoutDescriptor,
}

/// Everything the recipe decides for a set of settings, without building.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeInfo {
    pub settings: BuildSettings,
    pub valid: bool,
    pub options: OptionSet,
    pub requirements: Vec<DependencySpec>,
    pub layout: LayoutDescriptor,
    pub package_id: PackageId,
}

/// Describe what the recipe would do for `config`.
pub fn inspect(config: &ResolvedConfig, generator: Option<&str>) -> RecipeInfo {
    let recipe = Recipe::new(config.settings.clone());
    let options = recipe.configure_options().merge(config.user_options);
    let requirements = recipe.requirements();
    let generator = generator.or(config.conf.generator.as_deref());

    RecipeInfo {
        valid: crate::core::recipe::validate(recipe.settings()).is_ok(),
        layout: recipe.layout(generator),
        package_id: PackageId::compute(recipe.settings(), &options, &requirements),
        settings: recipe.settings().clone(),
        options,
        requirements,
    }
}

/// Validate, then dispatch to `orchestrator`.
///
/// Validation failures return before the orchestrator is touched.
pub fn build<O>(
    config: &ResolvedConfig,
    opts: &BuildOptions,
    orchestrator: &mut O,
) -> Result<BuildResult, RecipeError>
where
    O: BuildOrchestrator + ?Sized,
{
    let mut recipe = Recipe::new(config.settings.clone());
    recipe
        .validate()
        .map_err(|e| e.with_origin(config.build_type_origin.clone()))?;

    let requirements = recipe.requirements();
    for req in &requirements {
        tracing::info!("Requires {}", req);
    }

    let options = recipe.configure_options().merge(config.user_options);
    let generator = opts.generator.clone().or_else(|| config.conf.generator.clone());
    let layout = recipe.layout(generator.as_deref());
    let package_id = PackageId::compute(recipe.settings(), &options, &requirements);

    let ctx = BuildContext::new(
        recipe.settings().clone(),
        &layout,
        requirements,
        &opts.project_root,
    )
    .with_options(options)
    .with_generator(generator)
    .with_jobs(opts.jobs.or(config.conf.jobs))
    .with_prefix_paths(config.conf.prefix_path.clone());

    recipe.build(&ctx, orchestrator)?;

    Ok(BuildResult {
        package_id,
        layout: ctx.layout,
    })
}

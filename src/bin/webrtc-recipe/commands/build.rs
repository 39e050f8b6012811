//! `webrtc-recipe build` command

use anyhow::Result;

use crate::cli::{BuildArgs, SettingsArgs};
use webrtc_recipe::builder::cmake::is_cmake_project;
use webrtc_recipe::builder::CMakeOrchestrator;
use webrtc_recipe::ops::{build, BuildOptions};
use webrtc_recipe::util::diagnostic::{emit, suggestions, Diagnostic};

pub fn execute(settings: &SettingsArgs, args: BuildArgs, color: bool) -> Result<()> {
    let config = super::resolve(settings)?;

    let project_root = args
        .path
        .canonicalize()
        .unwrap_or_else(|_| args.path.clone());

    if !is_cmake_project(&project_root) {
        let warning = Diagnostic::warning("no CMakeLists.txt found, configure will likely fail")
            .with_location(&project_root)
            .with_suggestion(suggestions::PROJECT_PATH);
        emit(&warning, color);
    }

    let opts = BuildOptions {
        project_root,
        generator: args.generator,
        jobs: args.jobs,
    };

    let mut orchestrator = CMakeOrchestrator::new().dry_run(args.dry_run);
    let result = build(&config, &opts, &mut orchestrator)?;

    if args.dry_run {
        for command in orchestrator.planned() {
            println!("{}", command);
        }
        return Ok(());
    }

    eprintln!(
        "    Finished `{}` [{}] -> {}",
        config.settings.build_type,
        result.package_id.short(),
        result.layout.build_folder.display()
    );

    Ok(())
}

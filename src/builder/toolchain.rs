//! CMake toolchain file generation.
//!
//! The toolchain file carries the recipe's settings into CMake: build type,
//! processor, compilers, and where packages live. The generators folder,
//! which holds the package configs from [`crate::builder::deps`], comes first
//! on `CMAKE_PREFIX_PATH`. The file is written to that folder before CMake
//! configures.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use crate::builder::context::BuildContext;
use crate::util::fs::write_string;

/// File name of the generated toolchain.
pub const TOOLCHAIN_FILE_NAME: &str = "recipe_toolchain.cmake";

/// C and C++ compiler commands for a compiler setting.
pub fn compiler_commands(compiler: &str) -> Option<(&'static str, &'static str)> {
    match compiler {
        "gcc" => Some(("gcc", "g++")),
        "clang" | "apple-clang" => Some(("clang", "clang++")),
        "msvc" => Some(("cl", "cl")),
        _ => None,
    }
}

/// CMake's name for an architecture setting.
fn system_processor(arch: &str) -> &str {
    match arch {
        "armv8" => "aarch64",
        "armv7" | "armv7hf" => "armv7",
        "x86" => "i686",
        other => other,
    }
}

/// Render the toolchain file for a build context.
pub fn render(ctx: &BuildContext) -> String {
    let mut out = String::new();
    let settings = &ctx.settings;

    writeln!(out, "# Generated by webrtc-recipe. Do not edit.").unwrap();
    writeln!(out, "# settings: {}", settings).unwrap();
    for req in &ctx.requirements {
        writeln!(out, "# requires: {}", req).unwrap();
    }
    for (name, value) in ctx.options.entries() {
        writeln!(out, "# option: {}={}", name, value).unwrap();
    }
    out.push('\n');

    if ctx.layout.multi_config {
        writeln!(
            out,
            "set(CMAKE_CONFIGURATION_TYPES \"{}\" CACHE STRING \"\" FORCE)",
            settings.build_type
        )
        .unwrap();
    } else {
        writeln!(
            out,
            "set(CMAKE_BUILD_TYPE \"{}\" CACHE STRING \"\" FORCE)",
            settings.build_type
        )
        .unwrap();
    }

    writeln!(
        out,
        "set(CMAKE_SYSTEM_PROCESSOR {})",
        system_processor(&settings.arch)
    )
    .unwrap();

    match compiler_commands(&settings.compiler) {
        Some((cc, cxx)) => {
            writeln!(out, "set(CMAKE_C_COMPILER {})", cc).unwrap();
            writeln!(out, "set(CMAKE_CXX_COMPILER {})", cxx).unwrap();
        }
        None => {
            tracing::warn!(
                "unknown compiler `{}`, leaving compiler selection to CMake",
                settings.compiler
            );
        }
    }

    let generators = cmake_path(&ctx.layout.generators_folder);
    let mut paths = vec![generators.clone()];
    paths.extend(ctx.prefix_paths.iter().map(|p| cmake_path(p)));
    writeln!(out, "list(PREPEND CMAKE_PREFIX_PATH \"{}\")", paths.join(";")).unwrap();
    for req in &ctx.requirements {
        writeln!(out, "set({}_DIR \"{}\")", req.name, generators).unwrap();
    }

    writeln!(out, "set(CMAKE_POSITION_INDEPENDENT_CODE ON)").unwrap();

    out
}

/// Write the toolchain file into the generators folder.
pub fn generate(ctx: &BuildContext) -> Result<()> {
    let path = ctx.toolchain_file();
    tracing::debug!("writing toolchain file {}", path.display());
    write_string(&path, &render(ctx))
}

/// CMake wants forward slashes, even on Windows.
fn cmake_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::OptionSet;
    use crate::core::settings::BuildSettings;
    use crate::test_support::{cmake_project, debug_context};

    #[test]
    fn test_render_single_config() {
        let settings = BuildSettings::new("Linux", "gcc", "Debug", "armv8");
        let ctx = debug_context(&settings, "/p")
            .with_prefix_paths(vec!["/opt/webrtc".into(), "/opt/other".into()]);

        let text = render(&ctx);

        assert!(text.contains("# requires: webrtc/7151"));
        assert!(text.contains("set(CMAKE_BUILD_TYPE \"Debug\" CACHE STRING \"\" FORCE)"));
        assert!(text.contains("set(CMAKE_SYSTEM_PROCESSOR aarch64)"));
        assert!(text.contains("set(CMAKE_CXX_COMPILER g++)"));
        assert!(text.contains(
            "list(PREPEND CMAKE_PREFIX_PATH \"/p/build/Debug/generators;/opt/webrtc;/opt/other\")"
        ));
        assert!(text.contains("set(webrtc_DIR \"/p/build/Debug/generators\")"));
        assert!(!text.contains("CMAKE_CONFIGURATION_TYPES"));
    }

    #[test]
    fn test_render_multi_config_with_options() {
        let settings = BuildSettings::new("Windows", "msvc", "RelWithDebInfo", "x86_64");
        let options = OptionSet {
            shared: Some(false),
            ..Default::default()
        };
        let ctx = debug_context(&settings, "C:/p").with_options(options);

        let text = render(&ctx);

        assert!(text.contains("CMAKE_CONFIGURATION_TYPES \"RelWithDebInfo\""));
        assert!(!text.contains("CMAKE_BUILD_TYPE"));
        assert!(text.contains("set(CMAKE_C_COMPILER cl)"));
        assert!(text.contains("# option: shared=false"));
    }

    #[test]
    fn test_unknown_compiler_left_to_cmake() {
        let settings = BuildSettings::new("Linux", "intel-cc", "Debug", "x86_64");
        let text = render(&debug_context(&settings, "/p"));
        assert!(!text.contains("CMAKE_C_COMPILER"));
    }

    #[test]
    fn test_generate_writes_into_generators_folder() {
        let project = cmake_project();
        let settings = BuildSettings::new("Linux", "clang", "Debug", "x86_64");
        let ctx = debug_context(&settings, project.path());

        generate(&ctx).unwrap();

        let written = std::fs::read_to_string(
            project
                .path()
                .join("build")
                .join("Debug")
                .join("generators")
                .join(TOOLCHAIN_FILE_NAME),
        )
        .unwrap();
        assert!(written.contains("set(CMAKE_C_COMPILER clang)"));
    }
}

//! CMake package config generation for requirements.
//!
//! Each requirement gets a `<name>-config.cmake` and a
//! `<name>-config-version.cmake` in the generators folder. The config file
//! defines an imported `<name>::<name>` target whose include directory and
//! library are looked up under the configured prefix paths, so a consumer's
//! `find_package(<name>)` resolves to it.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::context::BuildContext;
use crate::core::dependency::DependencySpec;
use crate::util::fs::write_string;

/// File name of the package config for a requirement.
pub fn config_file_name(dep: &DependencySpec) -> String {
    format!("{}-config.cmake", dep.name)
}

/// File name of the package version file for a requirement.
pub fn version_file_name(dep: &DependencySpec) -> String {
    format!("{}-config-version.cmake", dep.name)
}

/// An installed requirement found under a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub include_dir: PathBuf,
    pub library: PathBuf,
}

/// Library file names tried for a requirement on an OS.
fn library_names(name: &str, os: &str) -> Vec<String> {
    match os {
        "Windows" => vec![format!("{}.lib", name), format!("lib{}.lib", name)],
        "Macos" => vec![format!("lib{}.a", name), format!("lib{}.dylib", name)],
        _ => vec![format!("lib{}.a", name), format!("lib{}.so", name)],
    }
}

/// Search `prefixes` in order for the requirement's headers and library.
///
/// Headers live in `include/<name>` when present, otherwise `include`.
/// Libraries are taken from `lib` or `lib64`.
pub fn locate(dep: &DependencySpec, os: &str, prefixes: &[PathBuf]) -> Option<InstalledPackage> {
    let names = library_names(&dep.name, os);

    for prefix in prefixes {
        let include_dir = [prefix.join("include").join(&dep.name), prefix.join("include")]
            .into_iter()
            .find(|dir| dir.is_dir());
        let Some(include_dir) = include_dir else {
            continue;
        };

        let library = ["lib", "lib64"]
            .iter()
            .flat_map(|dir| names.iter().map(move |n| prefix.join(dir).join(n)))
            .find(|path| path.is_file());

        if let Some(library) = library {
            tracing::debug!("found {} in {}", dep, prefix.display());
            return Some(InstalledPackage {
                include_dir,
                library,
            });
        }
    }

    None
}

/// System libraries a static WebRTC build needs on each OS.
fn system_link_libraries(name: &str, os: &str) -> &'static [&'static str] {
    if name != "webrtc" {
        return &[];
    }
    match os {
        "Linux" => &["Threads::Threads", "dl"],
        "Windows" => &["winmm", "ws2_32", "secur32", "iphlpapi", "strmiids", "dmoguids", "msdmo"],
        "Macos" => &[
            "-framework Foundation",
            "-framework CoreAudio",
            "-framework AudioToolbox",
            "-framework CoreGraphics",
        ],
        _ => &[],
    }
}

/// Render the package config for one requirement.
///
/// When the package is not installed under any prefix the config sets
/// `<name>_FOUND` to false with a message, and `find_package` reports it.
pub fn render_config(dep: &DependencySpec, ctx: &BuildContext) -> String {
    let mut out = String::new();
    let name = &dep.name;
    let target = format!("{}::{}", name, name);

    writeln!(out, "# Generated by webrtc-recipe. Do not edit.").unwrap();
    writeln!(out, "# requires: {}", dep).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "set({}_VERSION \"{}\")", name, dep.version).unwrap();

    let Some(found) = locate(dep, &ctx.settings.os, &ctx.prefix_paths) else {
        let searched: Vec<String> = ctx.prefix_paths.iter().map(|p| cmake_path(p)).collect();
        writeln!(out, "set({}_FOUND FALSE)", name).unwrap();
        writeln!(
            out,
            "set({}_NOT_FOUND_MESSAGE \"{} not found under prefix paths: [{}]\")",
            name,
            dep,
            searched.join(";")
        )
        .unwrap();
        writeln!(out, "return()").unwrap();
        return out;
    };

    let libs = system_link_libraries(name, &ctx.settings.os);
    if libs.contains(&"Threads::Threads") {
        writeln!(out, "include(CMakeFindDependencyMacro)").unwrap();
        writeln!(out, "find_dependency(Threads)").unwrap();
    }

    writeln!(out, "if(NOT TARGET {})", target).unwrap();
    writeln!(out, "  add_library({} UNKNOWN IMPORTED)", target).unwrap();
    writeln!(out, "  set_target_properties({} PROPERTIES", target).unwrap();
    writeln!(out, "    IMPORTED_LOCATION \"{}\"", cmake_path(&found.library)).unwrap();
    writeln!(
        out,
        "    INTERFACE_INCLUDE_DIRECTORIES \"{}\"",
        cmake_path(&found.include_dir)
    )
    .unwrap();
    if !libs.is_empty() {
        writeln!(out, "    INTERFACE_LINK_LIBRARIES \"{}\"", libs.join(";")).unwrap();
    }
    writeln!(out, "  )").unwrap();
    writeln!(out, "endif()").unwrap();
    writeln!(out, "set({}_FOUND TRUE)", name).unwrap();

    out
}

/// Render the version file. Only the pinned version, or no version, matches.
pub fn render_version(dep: &DependencySpec) -> String {
    let mut out = String::new();

    writeln!(out, "# Generated by webrtc-recipe. Do not edit.").unwrap();
    writeln!(out, "set(PACKAGE_VERSION \"{}\")", dep.version).unwrap();
    writeln!(out, "if(NOT PACKAGE_FIND_VERSION OR PACKAGE_FIND_VERSION STREQUAL PACKAGE_VERSION)").unwrap();
    writeln!(out, "  set(PACKAGE_VERSION_COMPATIBLE TRUE)").unwrap();
    writeln!(out, "  set(PACKAGE_VERSION_EXACT TRUE)").unwrap();
    writeln!(out, "else()").unwrap();
    writeln!(out, "  set(PACKAGE_VERSION_COMPATIBLE FALSE)").unwrap();
    writeln!(out, "endif()").unwrap();

    out
}

/// Files `generate` writes for a context, in order.
pub fn generated_files(ctx: &BuildContext) -> Vec<PathBuf> {
    let dir = &ctx.layout.generators_folder;
    ctx.requirements
        .iter()
        .flat_map(|dep| [dir.join(config_file_name(dep)), dir.join(version_file_name(dep))])
        .collect()
}

/// Write config and version files for every requirement.
pub fn generate(ctx: &BuildContext) -> Result<()> {
    let dir = &ctx.layout.generators_folder;

    for dep in &ctx.requirements {
        let config = dir.join(config_file_name(dep));
        tracing::debug!("writing package config {}", config.display());
        write_string(&config, &render_config(dep, ctx))?;
        write_string(&dir.join(version_file_name(dep)), &render_version(dep))?;
    }

    Ok(())
}

fn cmake_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

//! Standard CMake folder layout.
//!
//! ```text
//! <root>/                          source folder
//! <root>/build/<build_type>/       build folder (single-config generators)
//! <root>/build/                    build folder (multi-config generators)
//! <build folder>/generators/       toolchain and other generated files
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::settings::BuildSettings;

/// Folders a build uses, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutDescriptor {
    pub source_folder: PathBuf,
    pub build_folder: PathBuf,
    pub generators_folder: PathBuf,
    /// Whether the generator selects the build type at build time
    pub multi_config: bool,
}

impl LayoutDescriptor {
    /// Compute the layout for the given settings and optional generator name.
    pub fn cmake(settings: &BuildSettings, generator: Option<&str>) -> Self {
        let multi_config = is_multi_config(settings, generator);

        let build_folder = if multi_config {
            PathBuf::from("build")
        } else {
            Path::new("build").join(&settings.build_type)
        };
        let generators_folder = build_folder.join("generators");

        LayoutDescriptor {
            source_folder: PathBuf::from("."),
            build_folder,
            generators_folder,
            multi_config,
        }
    }

    /// Resolve the layout against a project root.
    pub fn under(&self, root: &Path) -> LayoutDescriptor {
        LayoutDescriptor {
            source_folder: normalize_join(root, &self.source_folder),
            build_folder: normalize_join(root, &self.build_folder),
            generators_folder: normalize_join(root, &self.generators_folder),
            multi_config: self.multi_config,
        }
    }
}

/// Multi-config generators pick the configuration at build time.
///
/// Without an explicit generator, MSVC builds default to Visual Studio.
fn is_multi_config(settings: &BuildSettings, generator: Option<&str>) -> bool {
    match generator {
        Some(g) => g.contains("Visual Studio") || g.contains("Multi-Config") || g == "Xcode",
        None => settings.compiler == "msvc",
    }
}

fn normalize_join(root: &Path, rel: &Path) -> PathBuf {
    if rel == Path::new(".") {
        root.to_path_buf()
    } else {
        root.join(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(compiler: &str, build_type: &str) -> BuildSettings {
        BuildSettings::new("Linux", compiler, build_type, "x86_64")
    }

    #[test]
    fn test_single_config_layout() {
        let layout = LayoutDescriptor::cmake(&settings("gcc", "Debug"), None);

        assert!(!layout.multi_config);
        assert_eq!(layout.source_folder, PathBuf::from("."));
        assert_eq!(layout.build_folder, Path::new("build").join("Debug"));
        assert_eq!(
            layout.generators_folder,
            Path::new("build").join("Debug").join("generators")
        );
    }

    #[test]
    fn test_multi_config_layout() {
        let layout = LayoutDescriptor::cmake(&settings("msvc", "RelWithDebInfo"), None);
        assert!(layout.multi_config);
        assert_eq!(layout.build_folder, PathBuf::from("build"));
        assert_eq!(layout.generators_folder, Path::new("build").join("generators"));

        let layout =
            LayoutDescriptor::cmake(&settings("gcc", "Debug"), Some("Ninja Multi-Config"));
        assert!(layout.multi_config);

        // An explicit single-config generator wins over the msvc default.
        let layout = LayoutDescriptor::cmake(&settings("msvc", "Debug"), Some("Ninja"));
        assert!(!layout.multi_config);
    }

    #[test]
    fn test_under_root() {
        let root = Path::new("/work/app");
        let layout = LayoutDescriptor::cmake(&settings("clang", "Debug"), None).under(root);

        assert_eq!(layout.source_folder, PathBuf::from("/work/app"));
        assert_eq!(layout.build_folder, root.join("build").join("Debug"));
    }
}

//! Build context - everything the orchestrator needs to configure and build.

use std::path::{Path, PathBuf};

use crate::core::dependency::DependencySpec;
use crate::core::layout::LayoutDescriptor;
use crate::core::options::OptionSet;
use crate::core::settings::BuildSettings;

/// Inputs handed to a [`BuildOrchestrator`](super::orchestrator::BuildOrchestrator).
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Validated settings
    pub settings: BuildSettings,

    /// Folder layout, resolved against `project_root`
    pub layout: LayoutDescriptor,

    /// Effective options for the declared requirements
    pub options: OptionSet,

    /// Declared requirements
    pub requirements: Vec<DependencySpec>,

    /// Project root (holds CMakeLists.txt)
    pub project_root: PathBuf,

    /// CMake generator override (e.g. "Ninja")
    pub generator: Option<String>,

    /// Parallel jobs for the compile phase (None = tool default)
    pub jobs: Option<usize>,

    /// Extra prefixes where installed packages can be found
    pub prefix_paths: Vec<PathBuf>,
}

impl BuildContext {
    /// Create a context with the layout resolved under `project_root`.
    pub fn new(
        settings: BuildSettings,
        layout: &LayoutDescriptor,
        requirements: Vec<DependencySpec>,
        project_root: impl AsRef<Path>,
    ) -> Self {
        let project_root = project_root.as_ref().to_path_buf();
        BuildContext {
            layout: layout.under(&project_root),
            settings,
            options: OptionSet::empty(),
            requirements,
            project_root,
            generator: None,
            jobs: None,
            prefix_paths: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: OptionSet) -> Self {
        self.options = options;
        self
    }

    pub fn with_generator(mut self, generator: Option<String>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_prefix_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.prefix_paths = paths;
        self
    }

    /// The build type being configured.
    pub fn build_type(&self) -> &str {
        &self.settings.build_type
    }

    /// Where the generated toolchain file lives.
    pub fn toolchain_file(&self) -> PathBuf {
        self.layout
            .generators_folder
            .join(crate::builder::toolchain::TOOLCHAIN_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_resolved_under_root() {
        let settings = BuildSettings::new("Linux", "gcc", "Debug", "x86_64");
        let layout = LayoutDescriptor::cmake(&settings, None);
        let ctx = BuildContext::new(settings, &layout, vec![], "/src/app");

        assert_eq!(ctx.layout.source_folder, PathBuf::from("/src/app"));
        assert_eq!(
            ctx.toolchain_file(),
            Path::new("/src/app/build/Debug/generators").join("recipe_toolchain.cmake")
        );
        assert_eq!(ctx.build_type(), "Debug");
    }
}

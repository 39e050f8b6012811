//! Fixtures shared by unit tests.

use std::path::Path;

use tempfile::TempDir;

use crate::builder::context::BuildContext;
use crate::core::layout::LayoutDescriptor;
use crate::core::recipe;
use crate::core::settings::BuildSettings;

/// Minimal CMake project consuming webrtc.
pub const CMAKELISTS: &str = r#"cmake_minimum_required(VERSION 3.20)
project(webrtc_example CXX)

find_package(webrtc REQUIRED)

add_executable(webrtc_example main.cpp)
target_link_libraries(webrtc_example webrtc::webrtc)
"#;

/// A build context for `settings` rooted at `root`, with the recipe's
/// requirements and default layout.
pub fn debug_context(settings: &BuildSettings, root: impl AsRef<Path>) -> BuildContext {
    BuildContext::new(
        settings.clone(),
        &LayoutDescriptor::cmake(settings, None),
        recipe::requirements(),
        root,
    )
}

/// A temporary directory holding a CMake project.
pub fn cmake_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("CMakeLists.txt"), CMAKELISTS).unwrap();
    std::fs::write(tmp.path().join("main.cpp"), "int main() { return 0; }\n").unwrap();
    tmp
}

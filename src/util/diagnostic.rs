//! User-friendly diagnostic messages.
//!
//! Every error shown to the user carries the root cause, the relevant
//! context, and a suggested fix.

use std::fmt;
use std::path::PathBuf;

/// Common suggestion messages.
pub mod suggestions {
    pub const SET_BUILD_TYPE: &str =
        "Pass `-s build_type=Debug` or `-s build_type=RelWithDebInfo`";

    pub const EDIT_PROFILE: &str =
        "Set `build_type` in the `[settings]` table of your profile (`webrtc-recipe profile path`)";

    pub const INSTALL_CMAKE: &str = "Install CMake and ensure it's in your PATH";

    pub const PROJECT_PATH: &str = "Point `--path` at the directory holding CMakeLists.txt";

    pub const BUILD_FAILED: &str = "Run `webrtc-recipe build --verbose` for the full tool output";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
    /// Related file, e.g. the profile a bad setting came from
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Diagnostic::error(message)
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = match (self.severity, color) {
            (Severity::Error, true) => "\x1b[1;31merror\x1b[0m".to_string(),
            (Severity::Warning, true) => "\x1b[1;33mwarning\x1b[0m".to_string(),
            (severity, false) => severity.to_string(),
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  = {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help_prefix));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::error("build type `Release` is not supported")
            .with_location("/home/me/.webrtc-recipe/profiles/default.toml")
            .with_context("allowed build types: Debug, RelWithDebInfo")
            .with_suggestion(suggestions::SET_BUILD_TYPE);

        let output = diag.format(false);
        assert!(output.starts_with("error: build type `Release`"));
        assert!(output.contains("--> /home/me/.webrtc-recipe/profiles/default.toml"));
        assert!(output.contains("= allowed build types"));
        assert!(output.contains("help: consider:"));
        assert!(output.contains("1. Pass `-s build_type=Debug`"));
    }

    #[test]
    fn test_warning_without_suggestions() {
        let output = Diagnostic::warning("no CMakeLists.txt found").format(false);
        assert_eq!(output, "warning: no CMakeLists.txt found\n");
    }
}

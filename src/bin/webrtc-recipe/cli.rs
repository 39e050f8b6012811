//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use webrtc_recipe::core::options::OptionAssignment;
use webrtc_recipe::core::settings::SettingAssignment;
use webrtc_recipe::util::config::HOME_ENV;

/// webrtc-recipe - validate settings and build the WebRTC example with CMake
#[derive(Parser)]
#[command(name = "webrtc-recipe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where settings come from.
#[derive(Args, Clone, Default)]
pub struct SettingsArgs {
    /// Profile to apply on top of the default profile
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Override a setting (os, compiler, build_type, arch)
    #[arg(short = 's', long = "setting", value_name = "NAME=VALUE", global = true)]
    pub settings: Vec<SettingAssignment>,

    /// Override a webrtc option (shared, with_h264, enable_rtti)
    #[arg(short = 'o', long = "option", value_name = "NAME=VALUE", global = true)]
    pub options: Vec<OptionAssignment>,

    /// Recipe home directory (holds profiles/)
    #[arg(long, env = HOME_ENV, global = true, hide_env_values = true)]
    pub home: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the resolved settings are supported
    Validate,

    /// Print the packages this recipe requires
    Requirements(OutputArgs),

    /// Print the build folder layout
    Layout(LayoutArgs),

    /// Show settings, options, requirements, layout, and package id
    Info(LayoutArgs),

    /// Validate, then configure and build with CMake
    Build(BuildArgs),

    /// Manage the default profile
    Profile(ProfileArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct LayoutArgs {
    /// CMake generator the layout is computed for
    #[arg(short = 'G', long)]
    pub generator: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Project directory containing CMakeLists.txt
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// CMake generator (e.g. Ninja)
    #[arg(short = 'G', long)]
    pub generator: Option<String>,

    /// Number of parallel jobs
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Detect host settings and write the default profile
    Detect(ProfileDetectArgs),

    /// Print the resolved profile
    Show,

    /// Print the default profile path
    Path,
}

#[derive(Args)]
pub struct ProfileDetectArgs {
    /// Overwrite an existing default profile
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

//! webrtc-recipe CLI

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use webrtc_recipe::core::errors::RecipeError;
use webrtc_recipe::util::diagnostic::emit;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli, color) {
        match e.downcast_ref::<RecipeError>() {
            Some(recipe_err) => emit(&recipe_err.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, color: bool) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("webrtc_recipe=debug")
    } else {
        EnvFilter::new("webrtc_recipe=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let settings = cli.settings;

    // Execute command
    match cli.command {
        Commands::Validate => commands::validate::execute(&settings),
        Commands::Requirements(args) => commands::requirements::execute(args),
        Commands::Layout(args) => commands::layout::execute(&settings, args),
        Commands::Info(args) => commands::info::execute(&settings, args),
        Commands::Build(args) => commands::build::execute(&settings, args, color),
        Commands::Profile(args) => commands::profile::execute(&settings, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

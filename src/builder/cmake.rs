//! CMake orchestrator.
//!
//! Configure writes the toolchain file and package configs, then runs
//! `cmake -S -B`; build runs `cmake --build`. Tool output is kept verbatim in
//! errors.

use std::path::{Path, PathBuf};

use crate::builder::context::BuildContext;
use crate::builder::orchestrator::{BuildOrchestrator, BuildPhase};
use crate::builder::{deps, toolchain};
use crate::core::errors::BuildError;
use crate::util::process::{find_cmake, ProcessBuilder};

/// Drives an external CMake installation.
#[derive(Debug)]
pub struct CMakeOrchestrator {
    program: Option<PathBuf>,
    dry_run: bool,
    planned: Vec<String>,
}

impl CMakeOrchestrator {
    /// Use the `cmake` found in PATH.
    pub fn new() -> Self {
        CMakeOrchestrator {
            program: find_cmake(),
            dry_run: false,
            planned: Vec::new(),
        }
    }

    /// Use a specific cmake executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        CMakeOrchestrator {
            program: Some(program.into()),
            dry_run: false,
            planned: Vec::new(),
        }
    }

    /// Record commands instead of running them. Nothing is written to disk.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Commands recorded in dry-run mode, in order.
    pub fn planned(&self) -> &[String] {
        &self.planned
    }

    fn program(&self) -> Result<PathBuf, BuildError> {
        match (&self.program, self.dry_run) {
            (Some(p), _) => Ok(p.clone()),
            (None, true) => Ok(PathBuf::from("cmake")),
            (None, false) => Err(BuildError::ToolNotFound {
                tool: "cmake".to_string(),
            }),
        }
    }

    /// `cmake -S <src> -B <build> ...`
    pub fn configure_command(&self, ctx: &BuildContext) -> Result<ProcessBuilder, BuildError> {
        let layout = &ctx.layout;
        let mut cmd = ProcessBuilder::new(self.program()?)
            .arg("-S")
            .arg(&layout.source_folder)
            .arg("-B")
            .arg(&layout.build_folder);

        if let Some(ref generator) = ctx.generator {
            cmd = cmd.arg("-G").arg(generator);
        }

        cmd = cmd.arg(format!(
            "-DCMAKE_TOOLCHAIN_FILE={}",
            ctx.toolchain_file().display()
        ));

        if !layout.multi_config {
            cmd = cmd.arg(format!("-DCMAKE_BUILD_TYPE={}", ctx.build_type()));
        }

        Ok(cmd.cwd(&ctx.project_root))
    }

    /// `cmake --build <build> --config <type> --parallel [N]`
    pub fn build_command(&self, ctx: &BuildContext) -> Result<ProcessBuilder, BuildError> {
        let mut cmd = ProcessBuilder::new(self.program()?)
            .arg("--build")
            .arg(&ctx.layout.build_folder)
            .arg("--config")
            .arg(ctx.build_type())
            .arg("--parallel");

        if let Some(jobs) = ctx.jobs {
            cmd = cmd.arg(jobs.to_string());
        }

        Ok(cmd.cwd(&ctx.project_root))
    }

    fn run(&mut self, phase: BuildPhase, cmd: ProcessBuilder) -> Result<(), BuildError> {
        let command_line = cmd.display_command();

        if self.dry_run {
            tracing::info!("would run: {}", command_line);
            self.planned.push(command_line);
            return Ok(());
        }

        tracing::debug!("running: {}", command_line);
        let output = cmd.exec()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            tracing::debug!("{}", line);
        }

        if !output.status.success() {
            return Err(BuildError::PhaseFailed {
                phase,
                command: command_line,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

impl Default for CMakeOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildOrchestrator for CMakeOrchestrator {
    fn name(&self) -> &str {
        "cmake"
    }

    fn configure(&mut self, ctx: &BuildContext) -> Result<(), BuildError> {
        let cmd = self.configure_command(ctx)?;

        if self.dry_run {
            tracing::info!("would write: {}", ctx.toolchain_file().display());
            for file in deps::generated_files(ctx) {
                tracing::info!("would write: {}", file.display());
            }
        } else {
            toolchain::generate(ctx)?;
            deps::generate(ctx)?;
        }

        self.run(BuildPhase::Configure, cmd)
    }

    fn build(&mut self, ctx: &BuildContext) -> Result<(), BuildError> {
        let cmd = self.build_command(ctx)?;
        self.run(BuildPhase::Build, cmd)
    }
}

/// Check if a directory contains a CMake project.
pub fn is_cmake_project(dir: &Path) -> bool {
    dir.join("CMakeLists.txt").exists()
}

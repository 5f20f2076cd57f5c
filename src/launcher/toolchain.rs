//! Dev-mode compilation of the Tinker CLI from a source checkout.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use tracing::info;

use crate::lib::errors::BuildError;

/// One dev-mode build invocation.
#[derive(Debug, Clone, Copy)]
pub struct BuildRequest<'a> {
    /// Where the toolchain must write the binary.
    pub output: &'a Path,
    /// Source entry point relative to the project root, e.g. `main.go`.
    pub entry_point: &'a str,
    /// Working directory for the build.
    pub project_root: &'a Path,
}

/// Abstraction over the external build toolchain so launches can be tested
/// without a real compiler.
pub trait Toolchain {
    /// Toolchain name for diagnostics.
    fn name(&self) -> String;

    /// Produce the requested binary or fail.
    fn build(&self, request: &BuildRequest<'_>) -> Result<(), BuildError>;
}

/// Assemble `<tool> build -o <output> <entry>` rooted at the project.
pub fn build_command(tool: &Path, request: &BuildRequest<'_>) -> Command {
    let mut command = Command::new(tool);
    command.current_dir(request.project_root);
    command.arg("build");
    command.arg("-o").arg(request.output);
    command.arg(request.entry_point);
    command
}

/// Toolchain that shells out to the Go compiler (or whatever `build.tool`
/// points at).
pub struct GoToolchain {
    tool: PathBuf,
}

impl GoToolchain {
    pub fn new(tool: PathBuf) -> Self {
        Self { tool }
    }
}

impl Toolchain for GoToolchain {
    fn name(&self) -> String {
        self.tool.display().to_string()
    }

    fn build(&self, request: &BuildRequest<'_>) -> Result<(), BuildError> {
        info!(
            target: "tinker_launcher::build",
            tool = %self.tool.display(),
            output = %request.output.display(),
            entry_point = request.entry_point,
            "Starting dev-mode build"
        );

        let status = build_command(&self.tool, request)
            .status()
            .map_err(|source| BuildError::ToolLaunch {
                tool: self.tool.clone(),
                source,
            })?;

        if !status.success() {
            return Err(BuildError::ToolFailed {
                tool: self.tool.clone(),
                exit_code: status.code(),
            });
        }

        if !request.output.exists() {
            return Err(BuildError::OutputMissing {
                path: request.output.to_path_buf(),
            });
        }

        Ok(())
    }
}

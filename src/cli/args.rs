//! CLI argument definitions and `LaunchProfile` construction.
use std::ffi::OsString;

use clap::Parser;

use super::{resolve_binary_override, resolve_config_source, LaunchProfile};
use crate::lib::paths;

/// Command-line arguments.
///
/// The launcher defines no flags of its own: help and version handling are
/// disabled so that every argument, hyphenated or not, reaches the Tinker CLI
/// untouched.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tinker",
    about = "Run the bundled Tinker CLI binary",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct LauncherArgs {
    /// Arguments forwarded verbatim to the Tinker CLI.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub forwarded: Vec<OsString>,
}

impl LauncherArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn into_profile(self) -> LaunchProfile {
        let install_dir = paths::install_dir().ok();
        LaunchProfile {
            forwarded: self.forwarded,
            config_source: resolve_config_source(install_dir.as_deref()),
            binary_override: resolve_binary_override(),
        }
    }
}

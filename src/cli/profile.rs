//! LaunchProfile and environment override resolution.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Environment variable naming the config file; when set, the file must load.
pub const CONFIG_PATH_ENV: &str = "TINKER_LAUNCHER_CONFIG";
/// Environment variable naming an explicit binary, bypassing resolution.
pub const BINARY_OVERRIDE_ENV: &str = "TINKER_CLI_BIN";
/// Default config file name, looked up next to the launcher executable.
pub const DEFAULT_CONFIG_FILE: &str = "launcher.toml";

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathSource {
    Env,
    Default,
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    /// Arguments forwarded verbatim to the child.
    pub forwarded: Vec<OsString>,
    pub config_source: Option<(PathBuf, ConfigPathSource)>,
    pub binary_override: Option<PathBuf>,
}

/// Resolve the config source: env override → default file beside the launcher.
pub fn resolve_config_source(install_dir: Option<&Path>) -> Option<(PathBuf, ConfigPathSource)> {
    resolve_config_source_from(env::var_os(CONFIG_PATH_ENV), install_dir)
}

/// Resolve from explicit environment values (testable helper).
fn resolve_config_source_from(
    env_value: Option<OsString>,
    install_dir: Option<&Path>,
) -> Option<(PathBuf, ConfigPathSource)> {
    if let Some(value) = env_value {
        if !value.is_empty() {
            return Some((PathBuf::from(value), ConfigPathSource::Env));
        }
    }

    install_dir.map(|dir| (dir.join(DEFAULT_CONFIG_FILE), ConfigPathSource::Default))
}

/// Resolve the `TINKER_CLI_BIN` binary override.
pub fn resolve_binary_override() -> Option<PathBuf> {
    resolve_binary_override_from(env::var_os(BINARY_OVERRIDE_ENV))
}

fn resolve_binary_override_from(env_value: Option<OsString>) -> Option<PathBuf> {
    env_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

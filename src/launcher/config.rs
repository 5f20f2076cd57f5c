//! Load and validate the optional `launcher.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::cli::ConfigPathSource;
use crate::lib::errors::ConfigError;

pub const DEFAULT_BINARY_BASE: &str = "tinker-cli";
pub const DEFAULT_BUILD_TOOL: &str = "go";
pub const DEFAULT_ENTRY_POINT: &str = "main.go";

/// Validated launcher configuration.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Base name the platform suffixes are appended to.
    pub binary: String,
    /// Overrides the project root derived from the launcher location.
    pub project_root: Option<PathBuf>,
    pub build: BuildSection,
    /// File the settings came from; `None` for built-in defaults.
    pub source_path: Option<PathBuf>,
}

/// Dev-mode build settings.
#[derive(Debug, Clone)]
pub struct BuildSection {
    pub tool: PathBuf,
    pub entry_point: String,
    /// When false, a missed resolution fails instead of compiling.
    pub auto_build: bool,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    launcher: Option<RawLauncherSection>,
    build: Option<RawBuildSection>,
}

#[derive(Debug, Deserialize, Default)]
struct RawLauncherSection {
    binary: Option<String>,
    project_root: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct RawBuildSection {
    tool: Option<PathBuf>,
    entry_point: Option<String>,
    auto_build: Option<bool>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY_BASE.to_string(),
            project_root: None,
            build: BuildSection {
                tool: PathBuf::from(DEFAULT_BUILD_TOOL),
                entry_point: DEFAULT_ENTRY_POINT.to_string(),
                auto_build: true,
            },
            source_path: None,
        }
    }
}

impl LauncherConfig {
    /// Apply the resolved config source: an explicitly requested file must
    /// load, a silently absent default file yields built-in defaults.
    pub fn load_optional(
        source: Option<(PathBuf, ConfigPathSource)>,
    ) -> Result<Self, ConfigError> {
        match source {
            Some((path, ConfigPathSource::Env)) => Self::load_from_path(path),
            Some((path, ConfigPathSource::Default)) if path.exists() => Self::load_from_path(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "tinker_launcher::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "tinker_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "tinker_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "tinker_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let (binary, project_root) = parse_launcher_section(raw.launcher, &path)?;
        let build = parse_build_section(raw.build, &path)?;

        Ok(Self {
            binary,
            project_root,
            build,
            source_path: Some(path),
        })
    }
}

fn parse_launcher_section(
    raw: Option<RawLauncherSection>,
    path: &Path,
) -> Result<(String, Option<PathBuf>), ConfigError> {
    let launcher_raw = raw.unwrap_or_default();
    let binary = launcher_raw
        .binary
        .unwrap_or_else(|| DEFAULT_BINARY_BASE.to_string());
    validate_binary_name(&binary, path)?;

    if let Some(root) = &launcher_raw.project_root {
        if !root.is_absolute() {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "launcher.project_root",
                message: "Use an absolute path".into(),
            });
        }
    }

    Ok((binary, launcher_raw.project_root))
}

fn parse_build_section(
    raw: Option<RawBuildSection>,
    path: &Path,
) -> Result<BuildSection, ConfigError> {
    let build_raw = raw.unwrap_or_default();
    let entry_point = build_raw
        .entry_point
        .unwrap_or_else(|| DEFAULT_ENTRY_POINT.to_string());
    if entry_point.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "build.entry_point",
            message: "Entry point must not be empty".into(),
        });
    }

    Ok(BuildSection {
        tool: build_raw
            .tool
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_TOOL)),
        entry_point,
        auto_build: build_raw.auto_build.unwrap_or(true),
    })
}

fn validate_binary_name(binary: &str, path: &Path) -> Result<(), ConfigError> {
    if binary.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.binary",
            message: "Binary name must not be empty".into(),
        });
    }
    if binary.contains(['/', '\\']) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.binary",
            message: "Use a bare file name, not a path".into(),
        });
    }
    Ok(())
}

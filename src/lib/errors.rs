use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating `launcher.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures of the dev-mode build toolchain.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to start build tool {tool}: {source}")]
    ToolLaunch {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Build tool {tool} exited abnormally (exit={exit_code:?})")]
    ToolFailed {
        tool: PathBuf,
        exit_code: Option<i32>,
    },
    #[error("Build tool reported success but {path} was not produced")]
    OutputMissing { path: PathBuf },
}

/// High-level failure types surfaced by the launch pipeline.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No candidate binary existed and no fallback build produced one.
    #[error("Could not find or build a runnable `{binary}` binary for {platform}")]
    Resolution {
        binary: String,
        platform: &'static str,
        checked: Vec<PathBuf>,
    },
    /// The launcher's own install directory could not be determined.
    #[error("Failed to locate the launcher executable: {source}")]
    InstallDir {
        #[source]
        source: io::Error,
    },
    #[error("Failed to make {path} executable: {source}")]
    Permissions {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to launch {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for {path}: {source}")]
    Wait {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Operator cancellation while the child was running.
    #[error("Interrupted while the child process was running")]
    Interrupted,
}

impl LaunchError {
    /// Process exit code the launcher terminates with for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchError::Interrupted => 130,
            _ => 1,
        }
    }
}

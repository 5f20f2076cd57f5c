//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::LauncherArgs;
pub use profile::{
    resolve_binary_override, resolve_config_source, ConfigPathSource, LaunchProfile,
    BINARY_OVERRIDE_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE,
};

//! Binary resolution and launch pipeline.

pub mod config;
pub mod platform;
pub mod resolve;
pub mod runner;
pub mod toolchain;

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::cli::LaunchProfile;
use crate::lib::{errors::LaunchError, fs, paths, telemetry::LaunchSpan};

pub use config::{BuildSection, LauncherConfig};
pub use platform::Platform;
pub use resolve::{Candidate, ResolveContext, Resolution, ResolvedSource};
pub use runner::to_process_exit;
pub use toolchain::{BuildRequest, GoToolchain, Toolchain};

/// Resolve, repair, run: the whole launcher in one call.
///
/// Returns the child's exit code on normal completion.
pub async fn launch(
    profile: &LaunchProfile,
    config: &LauncherConfig,
    toolchain: &dyn Toolchain,
) -> Result<i32, LaunchError> {
    let platform = Platform::detect();
    let span = LaunchSpan::start(platform);

    let resolved = resolve_binary(profile, config, platform, toolchain)?;
    if !platform.is_windows() {
        fs::ensure_executable(&resolved.path).map_err(|source| LaunchError::Permissions {
            path: resolved.path.clone(),
            source,
        })?;
    }

    let exit_code = runner::run(&resolved.path, &profile.forwarded).await?;
    span.finish(resolved.source, exit_code);
    Ok(exit_code)
}

/// Locate a runnable binary using the launcher's own install location.
fn resolve_binary(
    profile: &LaunchProfile,
    config: &LauncherConfig,
    platform: Platform,
    toolchain: &dyn Toolchain,
) -> Result<Candidate, LaunchError> {
    let install_dir = paths::install_dir().map_err(|source| LaunchError::InstallDir { source })?;
    resolve_binary_in(&install_dir, profile, config, platform, toolchain)
}

/// [`resolve_binary`] against an explicit install directory (testable).
fn resolve_binary_in(
    install_dir: &std::path::Path,
    profile: &LaunchProfile,
    config: &LauncherConfig,
    platform: Platform,
    toolchain: &dyn Toolchain,
) -> Result<Candidate, LaunchError> {
    if let Some(override_path) = &profile.binary_override {
        if override_path.exists() {
            info!(
                target: "tinker_launcher::resolve",
                path = %override_path.display(),
                "Using binary override"
            );
            return Ok(Candidate {
                path: override_path.clone(),
                source: ResolvedSource::Override,
            });
        }
        return Err(resolution_failure(
            config,
            platform,
            vec![override_path.clone()],
        ));
    }

    let project_root = config
        .project_root
        .clone()
        .or_else(|| paths::project_root_from(install_dir));
    let ctx = ResolveContext {
        platform,
        install_dir,
        project_root: project_root.as_deref(),
        base_name: &config.binary,
    };

    let resolution = resolve::resolve(&ctx);
    if let Some(candidate) = resolution.selected {
        debug!(
            target: "tinker_launcher::resolve",
            path = %candidate.path.display(),
            source = candidate.source.as_str(),
            "Resolved binary"
        );
        return Ok(candidate);
    }

    println!(
        "[*] Tinker binary not found at {}",
        resolution.checked[0].display()
    );

    let (Some(root), Some(output)) = (project_root.as_deref(), resolve::dev_build_output(&ctx))
    else {
        return Err(resolution_failure(config, platform, resolution.checked));
    };
    if !config.build.auto_build {
        return Err(resolution_failure(config, platform, resolution.checked));
    }

    println!("[*] Attempting to compile from source (dev mode)...");
    let request = BuildRequest {
        output: &output,
        entry_point: &config.build.entry_point,
        project_root: root,
    };
    match toolchain.build(&request) {
        Ok(()) => {
            println!("[*] Compilation successful.");
            Ok(Candidate {
                path: output,
                source: ResolvedSource::Compiled,
            })
        }
        Err(err) => {
            warn!(
                target: "tinker_launcher::resolve",
                tool = %toolchain.name(),
                reason = %err,
                "Dev-mode build failed"
            );
            println!("[!] Build failed: {err}");
            Err(resolution_failure(config, platform, resolution.checked))
        }
    }
}

fn resolution_failure(
    config: &LauncherConfig,
    platform: Platform,
    checked: Vec<PathBuf>,
) -> LaunchError {
    LaunchError::Resolution {
        binary: config.binary.clone(),
        platform: platform.as_str(),
        checked,
    }
}

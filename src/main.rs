//! Entry point for the Tinker CLI launcher.
use std::process::ExitCode;

use clap::Parser;
use tinker_launcher::{
    cli::LauncherArgs,
    launcher::{self, to_process_exit, GoToolchain, LauncherConfig},
    lib::{errors::LaunchError, telemetry},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, LauncherExit> {
    telemetry::init_tracing().map_err(LauncherExit::from_error)?;
    let profile = LauncherArgs::parse().into_profile();
    let config = LauncherConfig::load_optional(profile.config_source.clone())
        .map_err(LauncherExit::from_error)?;
    let toolchain = GoToolchain::new(config.build.tool.clone());

    let exit_code = launcher::launch(&profile, &config, &toolchain)
        .await
        .map_err(LauncherExit::from_launch_error)?;
    Ok(to_process_exit(exit_code))
}

/// Bundles a failure message with the launcher's own exit code.
#[derive(Debug)]
struct LauncherExit {
    message: String,
    exit_code: ExitCode,
}

impl LauncherExit {
    fn from_error(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("[!] Error: {err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    fn from_launch_error(err: LaunchError) -> Self {
        let exit_code = ExitCode::from(err.exit_code());
        let message = match &err {
            LaunchError::Resolution { checked, .. } => {
                let mut lines = format!("[!] Error: {err}");
                lines.push_str("\n[!] Paths checked:");
                for path in checked {
                    lines.push_str(&format!("\n  {}", path.display()));
                }
                lines
            }
            // An interrupt mirrors the child's own cancellation; stay quiet.
            LaunchError::Interrupted => String::new(),
            _ => format!("[!] Error running tinker: {err}"),
        };
        Self { message, exit_code }
    }

    /// Failure diagnostics go to stdout, like the rest of the launcher chatter.
    fn report(self) -> ExitCode {
        if !self.message.is_empty() {
            println!("{}", self.message);
        }
        self.exit_code
    }
}

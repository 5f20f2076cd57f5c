//! Spawn the resolved binary and mirror its exit status.

use std::{
    ffi::OsString,
    path::Path,
    process::{ExitCode, ExitStatus},
};

use tokio::{process::Command, signal};
use tracing::info;

use crate::lib::errors::LaunchError;

/// Assemble the child invocation: direct argument vector, no shell, stdio
/// inherited so interactive children keep working.
pub fn child_command(binary: &Path, args: &[OsString]) -> Command {
    let mut command = Command::new(binary);
    command.args(args);
    command.kill_on_drop(true);
    command
}

/// Run the binary to completion and return its exit code.
///
/// An interrupt while the child runs surfaces as [`LaunchError::Interrupted`];
/// dropping the child handle then releases it (kill-on-drop).
pub async fn run(binary: &Path, args: &[OsString]) -> Result<i32, LaunchError> {
    let mut child = child_command(binary, args)
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            path: binary.to_path_buf(),
            source,
        })?;

    info!(
        target: "tinker_launcher::run",
        binary = %binary.display(),
        args = args.len(),
        "Started child process"
    );

    tokio::select! {
        status = child.wait() => {
            let status = status.map_err(|source| LaunchError::Wait {
                path: binary.to_path_buf(),
                source,
            })?;
            Ok(exit_code_of(&status))
        }
        _ = signal::ctrl_c() => Err(LaunchError::Interrupted),
    }
}

/// Exit code carried by a child status.
///
/// On Unix a signal-terminated child maps to the conventional 128+N; a status
/// with neither code nor signal collapses to failure.
pub fn exit_code_of(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Convert a child exit code into this process's exit code.
///
/// Unix codes always fit; anything outside 0..=255 collapses to failure.
pub fn to_process_exit(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}

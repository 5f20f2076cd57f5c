//! Telemetry initialization and launch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

use crate::launcher::{Platform, ResolvedSource};

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr so the child's stdout stays untouched.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one launch.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
}

impl LaunchSpan {
    /// Start a launch span.
    pub fn start(platform: Platform) -> Self {
        let span = info_span!(
            target: "tinker_launcher::launch",
            "launch",
            platform = platform.as_str()
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording how the binary was resolved and how the
    /// child exited.
    pub fn finish(self, source: ResolvedSource, exit_code: i32) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "tinker_launcher::launch",
            source = source.as_str(),
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Child process completed"
        );
    }
}

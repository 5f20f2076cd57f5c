//! Candidate path resolution for the Tinker CLI binary.
//!
//! The fallback chain is an ordered list of candidate builders, each a pure
//! function of the [`ResolveContext`]; [`resolve`] probes them lazily and the
//! first existing path wins.

use std::path::{Path, PathBuf};

use super::Platform;

/// Directory under the project root holding locally built packaged binaries.
pub const LOCAL_PACKAGE_DIR: &str = "better_tinker";
/// `bin/` subdirectory name shared by the packaged and local-build layouts.
pub const BIN_DIR: &str = "bin";

/// How a binary path was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedSource {
    /// `<install-dir>/bin/<packaged-name>` shipped with the package.
    Packaged,
    /// `<project-root>/better_tinker/bin/<packaged-name>` from a local
    /// packaging run.
    LocalBuild,
    /// `<project-root>/<dev-name>` from a plain `go build`.
    DevBinary,
    /// Freshly compiled by the dev-mode fallback.
    Compiled,
    /// Explicit path from the `TINKER_CLI_BIN` override.
    Override,
}

impl ResolvedSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResolvedSource::Packaged => "packaged",
            ResolvedSource::LocalBuild => "local_build",
            ResolvedSource::DevBinary => "dev_binary",
            ResolvedSource::Compiled => "compiled",
            ResolvedSource::Override => "override",
        }
    }
}

/// A probe-ready candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub source: ResolvedSource,
}

/// Inputs the candidate builders are pure functions of.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub platform: Platform,
    pub install_dir: &'a Path,
    pub project_root: Option<&'a Path>,
    pub base_name: &'a str,
}

/// Outcome of probing the candidate chain.
#[derive(Debug)]
pub struct Resolution {
    pub selected: Option<Candidate>,
    /// Every path probed, in order, for failure diagnostics.
    pub checked: Vec<PathBuf>,
}

/// Primary candidate: the packaged binary next to the launcher.
pub fn packaged_candidate(ctx: &ResolveContext<'_>) -> Candidate {
    Candidate {
        path: ctx
            .install_dir
            .join(BIN_DIR)
            .join(ctx.platform.packaged_binary_name(ctx.base_name)),
        source: ResolvedSource::Packaged,
    }
}

/// Local packaging output under the project root, if one is known.
pub fn local_build_candidate(ctx: &ResolveContext<'_>) -> Option<Candidate> {
    ctx.project_root.map(|root| Candidate {
        path: root
            .join(LOCAL_PACKAGE_DIR)
            .join(BIN_DIR)
            .join(ctx.platform.packaged_binary_name(ctx.base_name)),
        source: ResolvedSource::LocalBuild,
    })
}

/// Plain dev build sitting directly in the project root, if one is known.
pub fn dev_candidate(ctx: &ResolveContext<'_>) -> Option<Candidate> {
    ctx.project_root.map(|root| Candidate {
        path: root.join(ctx.platform.dev_binary_name(ctx.base_name)),
        source: ResolvedSource::DevBinary,
    })
}

/// Candidate chain in priority order.
pub fn candidates(ctx: &ResolveContext<'_>) -> Vec<Candidate> {
    let mut chain = vec![packaged_candidate(ctx)];
    chain.extend(local_build_candidate(ctx));
    chain.extend(dev_candidate(ctx));
    chain
}

/// Probe candidates in order and stop at the first existing path.
pub fn resolve(ctx: &ResolveContext<'_>) -> Resolution {
    let mut checked = Vec::new();
    for candidate in candidates(ctx) {
        checked.push(candidate.path.clone());
        if candidate.path.exists() {
            return Resolution {
                selected: Some(candidate),
                checked,
            };
        }
    }
    Resolution {
        selected: None,
        checked,
    }
}

/// Output path the dev-mode build writes to.
pub fn dev_build_output(ctx: &ResolveContext<'_>) -> Option<PathBuf> {
    dev_candidate(ctx).map(|candidate| candidate.path)
}

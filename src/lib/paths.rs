//! Path derivation for the launcher's install directory and project root.

use std::{
    env, io,
    path::{Path, PathBuf},
};

/// Directory containing the launcher executable itself.
pub fn install_dir() -> Result<PathBuf, io::Error> {
    let exe = env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "launcher executable has no parent directory",
        )
    })
}

/// Project root for dev-mode resolution: two levels above the launcher
/// executable, i.e. the parent of its install directory.
///
/// Returns `None` when the install directory sits at the filesystem root.
pub fn project_root_from(install_dir: &Path) -> Option<PathBuf> {
    install_dir.parent().map(Path::to_path_buf)
}

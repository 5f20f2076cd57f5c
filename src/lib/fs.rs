//! Execute-permission inspection and repair for resolved binaries.

use std::{io, path::Path};

/// Owner/group/other execute bits.
#[cfg(unix)]
const EXEC_MASK: u32 = 0o111;

/// Returns true if the file carries at least one execute bit.
///
/// On non-Unix platforms there is no execute bit to inspect; existence is
/// enough.
#[cfg(unix)]
pub fn has_execute_bit(path: &Path) -> Result<bool, io::Error> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)?;
    Ok(metadata.permissions().mode() & EXEC_MASK != 0)
}

#[cfg(not(unix))]
pub fn has_execute_bit(path: &Path) -> Result<bool, io::Error> {
    std::fs::metadata(path).map(|_| true)
}

/// Add execute permission for owner/group/other, preserving every existing
/// permission bit. A file that already has any execute bit is left untouched.
#[cfg(unix)]
pub fn ensure_executable(path: &Path) -> Result<(), io::Error> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)?;
    let mut permissions = metadata.permissions();
    if permissions.mode() & EXEC_MASK != 0 {
        return Ok(());
    }
    permissions.set_mode(permissions.mode() | EXEC_MASK);
    std::fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
pub fn ensure_executable(_path: &Path) -> Result<(), io::Error> {
    Ok(())
}

//! File accessor for commit-message files and scanned sources.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::HookError;

pub fn read_text(path: &Path) -> Result<String, HookError> {
    std::fs::read_to_string(path).map_err(|e| HookError::file_access(path, e))
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, HookError> {
    std::fs::read(path).map_err(|e| HookError::file_access(path, e))
}

pub fn write_text(path: &Path, text: &str) -> Result<(), HookError> {
    std::fs::write(path, text).map_err(|e| HookError::file_access(path, e))
}

/// `COMMIT_EDITMSG` -> `COMMIT_EDITMSG.bak`, `msg.txt` -> `msg.txt.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Copy `path` next to itself with a `.bak` suffix before a destructive rewrite.
pub fn backup(path: &Path) -> Result<PathBuf, HookError> {
    let target = backup_path(path);
    std::fs::copy(path, &target).map_err(|e| HookError::file_access(path, e))?;
    log::debug!("backed up {} to {}", path.display(), target.display());
    Ok(target)
}

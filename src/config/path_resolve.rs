// src/config/path_resolve.rs

use crate::errors::{target_error, Error, Result};
use std::env;
use std::path::PathBuf;

/// Resolves the target argument to an absolute, canonicalized directory path.
///
/// With no argument the process's current directory is used. A path that does
/// not exist, cannot be resolved, or is not a directory is a target error.
pub fn resolve_target(target: Option<&str>) -> Result<PathBuf> {
    let raw = match target {
        Some(t) => PathBuf::from(t),
        None => env::current_dir().map_err(|e| target_error(e, "."))?,
    };
    let resolved = raw.canonicalize().map_err(|e| target_error(e, &raw))?;
    if !resolved.is_dir() {
        return Err(Error::NotADirectory {
            path: raw.display().to_string(),
        });
    }
    log::debug!("Resolved target '{}' to {}", raw.display(), resolved.display());
    Ok(resolved)
}

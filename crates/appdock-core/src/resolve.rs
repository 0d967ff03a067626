//! Input resolution.

use crate::error::{AppDockError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a user-supplied package path to its canonical absolute form.
///
/// Fails with [`AppDockError::PackageNotFound`] when the path does not name an
/// existing file. Nothing on disk is touched. The file's contents are not
/// inspected; any existing file is accepted as a package.
pub fn resolve_package(input: impl AsRef<Path>) -> Result<PathBuf> {
    let input = input.as_ref();

    let resolved = match std::fs::canonicalize(input) {
        Ok(path) => path,
        Err(e) => {
            debug!("Could not canonicalize {}: {}", input.display(), e);
            return Err(AppDockError::PackageNotFound(absolute_or_input(input)));
        }
    };

    if !resolved.is_file() {
        return Err(AppDockError::PackageNotFound(resolved));
    }

    debug!("Resolved package {} -> {}", input.display(), resolved.display());
    Ok(resolved)
}

fn absolute_or_input(input: &Path) -> PathBuf {
    std::path::absolute(input).unwrap_or_else(|_| input.to_path_buf())
}

//! Package placement.
//!
//! Moves the package into the applications directory and marks it executable.
//! The package is moved, never copied: after a successful placement the
//! original path no longer exists.

use crate::error::{AppDockError, Result};
use crate::platform;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where a package ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Final, executable location of the package.
    pub path: PathBuf,
    /// Whether a different file already occupied the destination.
    pub overwritten: bool,
}

/// Move `source` into `applications_dir`, keeping its file name.
///
/// An existing file at the destination is replaced with a warning. If source
/// and destination are already the same file (reinstalling in place), the move
/// is skipped. Any other move failure is returned as
/// [`AppDockError::RelocationFailed`].
pub fn place_package(source: &Path, applications_dir: &Path) -> Result<Placement> {
    fs::create_dir_all(applications_dir)
        .map_err(|e| AppDockError::io_with_path(e, applications_dir))?;

    let file_name = source
        .file_name()
        .ok_or_else(|| AppDockError::InvalidPackagePath {
            path: source.to_path_buf(),
            reason: "path has no file name".to_string(),
        })?;
    let dest = applications_dir.join(file_name);

    let in_place = platform::is_same_file(source, &dest);
    let overwritten = !in_place && dest.exists();
    if overwritten {
        warn!("{} already exists. Overwriting...", dest.display());
    }

    if in_place {
        info!("AppImage already at {}", dest.display());
    } else {
        move_file(source, &dest).map_err(|e| AppDockError::RelocationFailed {
            src: source.to_path_buf(),
            dest: dest.clone(),
            source: e,
        })?;
        info!("Moved AppImage to {}", dest.display());
    }

    platform::add_executable(&dest)?;
    info!("Made AppImage executable.");

    Ok(Placement {
        path: dest,
        overwritten,
    })
}

/// Rename, falling back to copy-and-delete across filesystems.
fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            debug!(
                "Rename across filesystems, copying {} to {}",
                source.display(),
                dest.display()
            );
            fs::copy(source, dest)?;
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}

fn is_cross_device(err: &io::Error) -> bool {
    #[cfg(unix)]
    {
        err.raw_os_error() == Some(libc::EXDEV)
    }

    #[cfg(not(unix))]
    {
        let _ = err;
        false
    }
}

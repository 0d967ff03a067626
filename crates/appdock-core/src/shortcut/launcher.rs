//! Launcher registration.

use super::desktop_entry::DesktopEntry;
use crate::error::Result;
use crate::naming;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the `.desktop` launcher for an installed package.
///
/// The entry is named from `stem`, runs `package`, and shows `icon`, which is
/// either an installed icon path or a stock icon name. Any existing launcher
/// with the same name is replaced.
///
/// # Returns
///
/// Path of the written descriptor.
pub fn register_launcher(
    package: &Path,
    stem: &str,
    icon: &str,
    launchers_dir: &Path,
) -> Result<PathBuf> {
    let entry = DesktopEntry::builder()
        .name(naming::display_name(stem))
        .exec(package.display().to_string())
        .icon(icon)
        .terminal(false)
        .build();

    let path = launchers_dir.join(naming::desktop_file_name(stem));
    entry.write_to_file(&path)?;

    info!("Desktop entry created at {}", path.display());
    Ok(path)
}

//! Per-user directory defaults.
//!
//! Only the binary's entry point should call these; the pipeline itself takes
//! its directories through [`crate::InstallPaths`].

use crate::config::InstallConfig;
use crate::error::{AppDockError, Result};
use std::path::PathBuf;

/// The invoking user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppDockError::Config {
        message: "Could not determine home directory".to_string(),
    })
}

/// `~/Applications`, where packages are placed.
pub fn applications_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(InstallConfig::APPLICATIONS_DIR_NAME))
}

/// `~/.local/share/icons`, where extracted icons are installed.
///
/// Icons go in the root of the icon directory rather than a theme
/// subdirectory; descriptors reference them by absolute path.
pub fn icons_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(".local").join("share").join("icons"))
}

/// `~/.local/share/applications` (XDG spec).
pub fn launchers_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(".local").join("share").join("applications"))
}

//! Centralized configuration for appdock.
//!
//! Fixed names and markers used by the install pipeline. Directory defaults
//! that depend on the user's home live in [`crate::platform::paths`].

use std::path::PathBuf;

/// Package placement.
pub struct InstallConfig;

impl InstallConfig {
    pub const APPLICATIONS_DIR_NAME: &'static str = "Applications";
    /// Scratch directory created inside the applications directory.
    pub const SCRATCH_DIR_NAME: &'static str = ".temp_extraction";
}

/// AppImage self-extraction layout.
pub struct ExtractionConfig;

impl ExtractionConfig {
    pub const EXTRACT_FLAG: &'static str = "--appimage-extract";
    pub const EXTRACTION_ROOT: &'static str = "squashfs-root";
    pub const DIR_ICON: &'static str = ".DirIcon";
    pub const THEMED_ICON_DIR: [&'static str; 4] = ["usr", "share", "icons", "hicolor"];
    pub const THEMED_ICON_SUBDIR: &'static str = "apps";
    pub const ICON_EXTENSIONS: [&'static str; 2] = ["png", "svg"];

    /// `usr/share/icons/hicolor` relative to an extraction root.
    pub fn themed_icon_dir() -> PathBuf {
        Self::THEMED_ICON_DIR.iter().collect()
    }
}

/// Launcher descriptor contents.
pub struct LauncherConfig;

impl LauncherConfig {
    pub const ICON_SUFFIX: &'static str = "_appimage_icon";
    pub const FALLBACK_ICON: &'static str = "application-x-executable";
    pub const ENTRY_TYPE: &'static str = "Application";
    pub const CATEGORY: &'static str = "Utility";
    pub const DESKTOP_EXTENSION: &'static str = "desktop";
}

/// Base directories the pipeline writes into.
///
/// Passed explicitly so tests can redirect everything into a temp dir; the
/// home-based defaults come from [`InstallPaths::from_home`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    /// Final location of installed packages (`~/Applications`).
    pub applications_dir: PathBuf,
    /// Installed icons (`~/.local/share/icons`).
    pub icons_dir: PathBuf,
    /// Launcher descriptors (`~/.local/share/applications`).
    pub launchers_dir: PathBuf,
}

impl InstallPaths {
    pub fn new(
        applications_dir: impl Into<PathBuf>,
        icons_dir: impl Into<PathBuf>,
        launchers_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            applications_dir: applications_dir.into(),
            icons_dir: icons_dir.into(),
            launchers_dir: launchers_dir.into(),
        }
    }

    /// Lay out all three directories under a single home directory.
    pub fn under(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            applications_dir: home.join(InstallConfig::APPLICATIONS_DIR_NAME),
            icons_dir: home.join(".local").join("share").join("icons"),
            launchers_dir: home.join(".local").join("share").join("applications"),
        }
    }

    /// Conventional per-user locations.
    pub fn from_home() -> crate::Result<Self> {
        Ok(Self::new(
            crate::platform::applications_dir()?,
            crate::platform::icons_dir()?,
            crate::platform::launchers_dir()?,
        ))
    }

    /// Scratch directory used during icon extraction.
    pub fn scratch_dir(&self) -> PathBuf {
        self.applications_dir.join(InstallConfig::SCRATCH_DIR_NAME)
    }
}

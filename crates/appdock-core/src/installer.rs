//! The install pipeline.
//!
//! Resolve, place, extract the icon, register the launcher. Stages run once,
//! in order. Only the icon stage recovers from its own failures; every other
//! error ends the run.

use crate::config::InstallPaths;
use crate::error::Result;
use crate::naming;
use crate::placer::place_package;
use crate::resolve::resolve_package;
use crate::shortcut::{register_launcher, IconDiscovery, IconExtractor};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of a completed installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Final, executable location of the package.
    pub package_path: PathBuf,
    /// Whether a different file at the destination was replaced.
    pub overwritten: bool,
    /// What the icon stage produced.
    pub icon: IconDiscovery,
    /// The written launcher descriptor.
    pub desktop_entry: PathBuf,
}

impl InstallReport {
    /// The `Icon=` value written into the launcher.
    pub fn icon_reference(&self) -> String {
        self.icon.icon_reference()
    }
}

/// Installs AppImages into a fixed set of directories.
pub struct Installer {
    paths: InstallPaths,
}

impl Installer {
    pub fn new(paths: InstallPaths) -> Self {
        Self { paths }
    }

    /// Installer targeting the current user's home directory.
    pub fn for_current_user() -> Result<Self> {
        Ok(Self::new(InstallPaths::from_home()?))
    }

    pub fn paths(&self) -> &InstallPaths {
        &self.paths
    }

    /// Install the package at `package`.
    ///
    /// # Errors
    ///
    /// - [`crate::AppDockError::PackageNotFound`] before anything is touched
    /// - [`crate::AppDockError::RelocationFailed`] if the package can't be moved;
    ///   no icon or launcher is written
    /// - [`crate::AppDockError::Io`] for directory, permission or launcher
    ///   write failures
    ///
    /// Icon problems never fail the install; they show up as
    /// [`IconDiscovery::NotFound`] or [`IconDiscovery::ExtractionFailed`].
    pub fn install(&self, package: impl AsRef<Path>) -> Result<InstallReport> {
        let source = resolve_package(package)?;
        let stem = naming::package_stem(&source)?;
        debug!("Installing {} as '{}'", source.display(), stem);

        let placement = place_package(&source, &self.paths.applications_dir)?;

        let icon = IconExtractor::for_paths(&self.paths).extract(&placement.path, &stem);

        let desktop_entry = register_launcher(
            &placement.path,
            &stem,
            &icon.icon_reference(),
            &self.paths.launchers_dir,
        )?;

        Ok(InstallReport {
            package_path: placement.path,
            overwritten: placement.overwritten,
            icon,
            desktop_entry,
        })
    }
}

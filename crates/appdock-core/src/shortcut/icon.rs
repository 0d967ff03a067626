//! Icon extraction for installed packages.
//!
//! Handles:
//! - Self-extracting the package into a scratch directory
//! - Picking an icon from the extracted tree
//! - Installing the chosen icon into the user icon directory
//!
//! Nothing in here aborts an installation. Every failure is folded into an
//! [`IconDiscovery`] so the launcher can fall back to a stock icon.

use crate::config::{ExtractionConfig, InstallPaths, LauncherConfig};
use crate::error::{AppDockError, Result};
use crate::naming;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Outcome of looking for a package icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconDiscovery {
    /// An icon was found and installed at this path.
    Found(PathBuf),
    /// Extraction worked but the tree contained no usable icon.
    NotFound,
    /// The package could not be extracted, or the icon could not be installed.
    ExtractionFailed(String),
}

impl IconDiscovery {
    /// Value for the launcher's `Icon=` key.
    pub fn icon_reference(&self) -> String {
        match self {
            IconDiscovery::Found(path) => path.display().to_string(),
            IconDiscovery::NotFound | IconDiscovery::ExtractionFailed(_) => {
                LauncherConfig::FALLBACK_ICON.to_string()
            }
        }
    }

    /// The installed icon, if any.
    pub fn installed_path(&self) -> Option<&Path> {
        match self {
            IconDiscovery::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Extracts and installs package icons.
pub struct IconExtractor {
    /// Scratch directory for self-extraction. Removed after every run.
    scratch_dir: PathBuf,
    /// Destination for installed icons.
    icons_dir: PathBuf,
}

impl IconExtractor {
    /// Create a new icon extractor.
    ///
    /// # Arguments
    ///
    /// * `scratch_dir` - Directory the package is extracted into
    /// * `icons_dir` - Directory installed icons are copied to
    pub fn new(scratch_dir: impl AsRef<Path>, icons_dir: impl AsRef<Path>) -> Self {
        Self {
            scratch_dir: scratch_dir.as_ref().to_path_buf(),
            icons_dir: icons_dir.as_ref().to_path_buf(),
        }
    }

    /// Extractor using the scratch and icon directories of `paths`.
    pub fn for_paths(paths: &InstallPaths) -> Self {
        Self::new(paths.scratch_dir(), &paths.icons_dir)
    }

    /// Extract `package` and install its best icon under a name derived from
    /// `stem`.
    ///
    /// The scratch directory is gone when this returns, whatever the outcome.
    pub fn extract(&self, package: &Path, stem: &str) -> IconDiscovery {
        info!("Extracting AppImage icon...");

        let discovery = match ScratchDir::create(&self.scratch_dir) {
            Ok(scratch) => self
                .extract_into(package, stem, scratch.path())
                .unwrap_or_else(|e| IconDiscovery::ExtractionFailed(e.to_string())),
            Err(e) => IconDiscovery::ExtractionFailed(e.to_string()),
        };

        match &discovery {
            IconDiscovery::Found(path) => info!("Icon installed to {}", path.display()),
            IconDiscovery::NotFound => {
                warn!("Could not find icon in AppImage. Using default system icon.")
            }
            IconDiscovery::ExtractionFailed(reason) => warn!("Error extracting icon: {}", reason),
        }

        discovery
    }

    fn extract_into(&self, package: &Path, stem: &str, scratch: &Path) -> Result<IconDiscovery> {
        let root = run_self_extraction(package, scratch)?;

        let Some(candidate) = find_icon_candidate(&root) else {
            return Ok(IconDiscovery::NotFound);
        };
        debug!("Chose icon candidate {}", candidate.display());

        let installed = install_icon(&candidate, stem, &self.icons_dir)?;
        Ok(IconDiscovery::Found(installed))
    }
}

/// Run `<package> --appimage-extract` inside `workdir` and return the
/// extraction root it produced.
///
/// Output is discarded. The call blocks until the package exits.
pub fn run_self_extraction(package: &Path, workdir: &Path) -> Result<PathBuf> {
    let status = Command::new(package)
        .arg(ExtractionConfig::EXTRACT_FLAG)
        .current_dir(workdir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| AppDockError::ExtractionFailed {
            message: format!("failed to run {}: {}", package.display(), e),
        })?;

    if !status.success() {
        return Err(AppDockError::ExtractionFailed {
            message: format!("{} exited with {}", package.display(), status),
        });
    }

    let root = workdir.join(ExtractionConfig::EXTRACTION_ROOT);
    if !root.is_dir() {
        return Err(AppDockError::ExtractionFailed {
            message: format!("{} was not created", root.display()),
        });
    }

    Ok(root)
}

/// Pick the icon to install from an extraction root.
///
/// `.DirIcon` wins if it resolves to an existing file. Otherwise the themed
/// icon whose full path sorts last is used; resolution directories are named
/// by size (`128x128`, `512x512`), so that usually surfaces a large variant.
pub fn find_icon_candidate(root: &Path) -> Option<PathBuf> {
    if let Some(icon) = resolve_dir_icon(root) {
        return Some(icon);
    }

    last_by_path_string(themed_icons(root))
}

/// Follow `.DirIcon` (often a symlink into the icon theme) to a real file.
fn resolve_dir_icon(root: &Path) -> Option<PathBuf> {
    let dir_icon = root.join(ExtractionConfig::DIR_ICON);
    match fs::canonicalize(&dir_icon) {
        Ok(target) if target.is_file() => Some(target),
        Ok(target) => {
            debug!("{} resolves to non-file {}", dir_icon.display(), target.display());
            None
        }
        Err(_) => None,
    }
}

/// Every `usr/share/icons/hicolor/*/apps/*.{png,svg}` under `root`,
/// dot-entries included.
fn themed_icons(root: &Path) -> Vec<PathBuf> {
    let themed_dir = root.join(ExtractionConfig::themed_icon_dir());
    if !themed_dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(&themed_dir)
        .follow_links(true)
        .min_depth(3)
        .max_depth(3)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_themed_icon(&themed_dir, path))
        .collect()
}

fn is_themed_icon(themed_dir: &Path, path: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(themed_dir) else {
        return false;
    };

    let parts: Vec<&OsStr> = relative.iter().collect();
    let [_size_dir, apps_dir, _file_name] = parts[..] else {
        return false;
    };

    if apps_dir.to_str() != Some(ExtractionConfig::THEMED_ICON_SUBDIR) {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ExtractionConfig::ICON_EXTENSIONS.contains(&ext))
}

/// Sort by the raw path string (not by components) and take the last entry.
fn last_by_path_string(mut paths: Vec<PathBuf>) -> Option<PathBuf> {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    paths.pop()
}

/// Copy `candidate` into `icons_dir` as `<slug>_appimage_icon<ext>`.
///
/// Symlinked candidates are copied by content.
pub fn install_icon(candidate: &Path, stem: &str, icons_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(icons_dir).map_err(|e| AppDockError::Io {
        message: "create icon directory".to_string(),
        path: Some(icons_dir.to_path_buf()),
        source: Some(e),
    })?;

    let dest = icons_dir.join(naming::icon_file_name(stem, candidate));
    fs::copy(candidate, &dest).map_err(|e| AppDockError::Io {
        message: "copy icon".to_string(),
        path: Some(dest.clone()),
        source: Some(e),
    })?;

    Ok(dest)
}

/// Scratch directory that is removed when dropped.
struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create an empty scratch directory, clearing leftovers from an
    /// interrupted run.
    fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!("Removing stale scratch directory {}", path.display());
            remove_tree(path).map_err(|e| AppDockError::io_with_path(e, path))?;
        }
        fs::create_dir_all(path).map_err(|e| AppDockError::io_with_path(e, path))?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = remove_tree(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(
                    "Failed to remove scratch directory {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

/// Remove an extracted tree, including directories the package image marked
/// read-only.
fn remove_tree(path: &Path) -> io::Result<()> {
    make_dirs_writable(path);
    fs::remove_dir_all(path)
}

/// Add owner write permission to every directory under `root`.
///
/// Symlinks are not followed. Failures are left for `remove_dir_all` to report.
#[cfg(unix)]
fn make_dirs_writable(root: &Path) {
    use std::os::unix::fs::PermissionsExt;

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_dir() {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let mode = metadata.permissions().mode();
        if mode & 0o200 == 0 {
            let _ = fs::set_permissions(entry.path(), fs::Permissions::from_mode(mode | 0o200));
        }
    }
}

#[cfg(not(unix))]
fn make_dirs_writable(_root: &Path) {}

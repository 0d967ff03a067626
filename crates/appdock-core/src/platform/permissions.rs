//! Platform-specific file permission handling.

use crate::error::{AppDockError, Result};
use std::path::Path;
use tracing::debug;

/// Add the owner/group/other execute bits to a file.
///
/// # Platform Behavior
/// - **Linux/macOS**: `mode | 0o111`, keeping every other bit as it was
/// - **Windows**: No-op (Windows determines executability by file extension)
///
/// # Errors
/// Returns an error if the file doesn't exist or permissions can't be changed.
pub fn add_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path).map_err(|e| AppDockError::io_with_path(e, path))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        std::fs::set_permissions(path, permissions)
            .map_err(|e| AppDockError::io_with_path(e, path))?;
        debug!("Added executable permissions on: {}", path.display());
    }

    #[cfg(not(unix))]
    {
        debug!("Skipping executable bit for: {}", path.display());
    }

    Ok(())
}

/// Check if a file has any execute bit set.
///
/// Always false on non-Unix platforms.
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path)
            .map(|metadata| metadata.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        let _ = path;
        false
    }
}

/// Whether two paths name the same underlying file.
///
/// Returns false if either path cannot be inspected.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        match (std::fs::metadata(a), std::fs::metadata(b)) {
            (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
            _ => false,
        }
    }

    #[cfg(not(unix))]
    {
        match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
            (Ok(ca), Ok(cb)) => ca == cb,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_add_executable() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Tool.AppImage");
        File::create(&file_path).unwrap();

        add_executable(&file_path).unwrap();

        #[cfg(unix)]
        assert!(is_executable(&file_path));
    }

    #[cfg(unix)]
    #[test]
    fn test_add_executable_preserves_existing_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("private.AppImage");
        File::create(&file_path).unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o640)).unwrap();

        add_executable(&file_path).unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o751);
    }

    #[test]
    fn test_add_executable_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = add_executable(&temp_dir.path().join("nope"));

        #[cfg(unix)]
        assert!(matches!(result, Err(AppDockError::Io { .. })));
        #[cfg(not(unix))]
        let _ = result;
    }

    #[cfg(unix)]
    #[test]
    fn test_is_executable_unix() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file");
        File::create(&file_path).unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o644)).unwrap();

        assert!(!is_executable(&file_path));

        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o744)).unwrap();
        assert!(is_executable(&file_path));
    }

    #[test]
    fn test_is_same_file() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a");
        let b = temp_dir.path().join("b");
        fs::write(&a, "same").unwrap();
        fs::write(&b, "same").unwrap();

        assert!(is_same_file(&a, &a));
        assert!(is_same_file(&a, &temp_dir.path().join(".").join("a")));
        assert!(!is_same_file(&a, &b));
        assert!(!is_same_file(&a, &temp_dir.path().join("missing")));
    }
}

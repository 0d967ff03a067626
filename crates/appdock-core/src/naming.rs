//! Names derived from the package file name.
//!
//! Every artifact the installer writes is named from the package's stem (its
//! file name minus the last extension), so reinstalling a package with the same
//! file name lands on the same icon and descriptor paths.

use crate::config::LauncherConfig;
use crate::error::{AppDockError, Result};
use std::path::Path;

/// The package's file name without its last extension.
///
/// `MyApp-1.2.3.AppImage` gives `MyApp-1.2.3`.
pub fn package_stem(package: &Path) -> Result<String> {
    package
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| AppDockError::InvalidPackagePath {
            path: package.to_path_buf(),
            reason: "path has no file name".to_string(),
        })
}

/// Human-readable application name for the launcher.
///
/// Underscores become spaces and the result is title-cased: every cased
/// character following an uncased one is uppercased, the rest lowercased.
///
/// # Examples
///
/// ```
/// use appdock_core::naming::display_name;
///
/// assert_eq!(display_name("my_cool_app"), "My Cool App");
/// assert_eq!(display_name("MyApp-1.2.3"), "Myapp-1.2.3");
/// ```
pub fn display_name(stem: &str) -> String {
    title_case(&stem.replace('_', " "))
}

/// Lowercased stem with spaces replaced by underscores.
pub fn icon_slug(stem: &str) -> String {
    stem.to_lowercase().replace(' ', "_")
}

/// File name for an installed icon: `<slug>_appimage_icon[.<ext>]`.
///
/// The extension is taken from the chosen candidate; a candidate without one
/// (a plain `.DirIcon` file) yields a name without an extension.
pub fn icon_file_name(stem: &str, candidate: &Path) -> String {
    let base = format!("{}{}", icon_slug(stem), LauncherConfig::ICON_SUFFIX);
    match candidate.extension() {
        Some(ext) => format!("{}.{}", base, ext.to_string_lossy()),
        None => base,
    }
}

/// File name for the launcher descriptor: `<stem>.desktop`.
pub fn desktop_file_name(stem: &str) -> String {
    format!("{}.{}", stem, LauncherConfig::DESKTOP_EXTENSION)
}

/// Uppercase the first cased character of each run of cased characters and
/// lowercase the rest.
///
/// Uses the uppercase mapping, not Unicode titlecase, so `ß` becomes `SS` and
/// digraphs like `ǆ` become `Ǆ` rather than `ǅ`.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        if previous_cased {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_cased = c.is_lowercase() || c.is_uppercase();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_package_stem() {
        assert_eq!(
            package_stem(Path::new("/home/u/MyApp-1.2.3.AppImage")).unwrap(),
            "MyApp-1.2.3"
        );
        assert_eq!(package_stem(Path::new("/opt/tool")).unwrap(), "tool");
        assert!(package_stem(Path::new("/")).is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("MyApp-1.2.3"), "Myapp-1.2.3");
        assert_eq!(display_name("my_cool_app"), "My Cool App");
        assert_eq!(display_name("KRITA"), "Krita");
        assert_eq!(display_name("obs-studio_x86_64"), "Obs-Studio X86 64");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_icon_slug() {
        assert_eq!(icon_slug("MyApp-1.2.3"), "myapp-1.2.3");
        assert_eq!(icon_slug("Some Tool v2"), "some_tool_v2");
    }

    #[test]
    fn test_icon_file_name() {
        assert_eq!(
            icon_file_name(
                "MyApp-1.2.3",
                &PathBuf::from("/x/usr/share/icons/hicolor/512x512/apps/myapp.png")
            ),
            "myapp-1.2.3_appimage_icon.png"
        );
        assert_eq!(
            icon_file_name("Editor", Path::new("/x/squashfs-root/editor.svg")),
            "editor_appimage_icon.svg"
        );
        assert_eq!(
            icon_file_name("Editor", Path::new("/x/squashfs-root/.DirIcon")),
            "editor_appimage_icon"
        );
    }

    #[test]
    fn test_desktop_file_name() {
        assert_eq!(desktop_file_name("MyApp-1.2.3"), "MyApp-1.2.3.desktop");
    }
}

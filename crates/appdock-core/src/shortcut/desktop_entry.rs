//! Desktop entry (.desktop file) generation.
//!
//! Implements the subset of the XDG Desktop Entry Specification needed to
//! register an AppImage in the application menu.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::LauncherConfig;
use crate::error::{AppDockError, Result};
use crate::platform;
use tracing::debug;

/// A desktop entry representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    /// Entry type (usually "Application").
    pub entry_type: String,
    /// Entry name (shown in menus).
    pub name: String,
    /// Executable command.
    pub exec: String,
    /// Icon name or path.
    pub icon: String,
    /// Categories (semicolon-separated).
    pub categories: Vec<String>,
    /// Whether to run in a terminal.
    pub terminal: bool,
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            entry_type: LauncherConfig::ENTRY_TYPE.to_string(),
            name: String::new(),
            exec: String::new(),
            icon: LauncherConfig::FALLBACK_ICON.to_string(),
            categories: vec![LauncherConfig::CATEGORY.to_string()],
            terminal: false,
        }
    }
}

impl DesktopEntry {
    /// Create a new desktop entry builder.
    pub fn builder() -> DesktopEntryBuilder {
        DesktopEntryBuilder::new()
    }

    /// Write the desktop entry to a file, replacing any previous content, and
    /// mark it executable so desktop environments treat it as trusted.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppDockError::Io {
                message: "create directory".to_string(),
                path: Some(parent.to_path_buf()),
                source: Some(e),
            })?;
        }

        fs::write(path, self.to_string()).map_err(|e| AppDockError::Io {
            message: "write desktop file".to_string(),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;

        platform::add_executable(path)?;

        debug!("Wrote desktop entry to {:?}", path);

        Ok(())
    }
}

impl fmt::Display for DesktopEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Desktop Entry]")?;
        writeln!(f, "Type={}", self.entry_type)?;
        writeln!(f, "Name={}", self.name)?;
        writeln!(f, "Exec={}", self.exec)?;
        writeln!(f, "Icon={}", self.icon)?;

        if !self.categories.is_empty() {
            writeln!(f, "Categories={};", self.categories.join(";"))?;
        }

        writeln!(f, "Terminal={}", if self.terminal { "true" } else { "false" })
    }
}

/// Builder for desktop entries.
pub struct DesktopEntryBuilder {
    entry: DesktopEntry,
}

impl DesktopEntryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entry: DesktopEntry::default(),
        }
    }

    /// Set the entry name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = name.into();
        self
    }

    /// Set the executable command.
    pub fn exec(mut self, exec: impl Into<String>) -> Self {
        self.entry.exec = exec.into();
        self
    }

    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.entry.icon = icon.into();
        self
    }

    /// Set whether to run in terminal.
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.entry.terminal = terminal;
        self
    }

    /// Build the desktop entry.
    pub fn build(self) -> DesktopEntry {
        self.entry
    }
}

impl Default for DesktopEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

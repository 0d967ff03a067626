//! Desktop integration for installed packages.
//!
//! Provides:
//! - Icon extraction from the package's own filesystem tree
//! - Launcher registration (.desktop files in ~/.local/share/applications)
//!
//! # Platform Support
//!
//! Linux only (XDG Desktop Entry Specification), which is the only platform
//! AppImages run on.

mod desktop_entry;
mod icon;
mod launcher;

pub use desktop_entry::{DesktopEntry, DesktopEntryBuilder};
pub use icon::{
    find_icon_candidate, install_icon, run_self_extraction, IconDiscovery, IconExtractor,
};
pub use launcher::register_launcher;

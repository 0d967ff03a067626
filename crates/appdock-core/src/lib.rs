//! appdock core - install AppImages into the user's desktop.
//!
//! This crate moves an AppImage into `~/Applications`, pulls an icon out of
//! the package's own filesystem tree, and registers a `.desktop` launcher for
//! it. It has no CLI concerns; see the `appdock-cli` crate for the binary.
//!
//! # Example
//!
//! ```rust,no_run
//! use appdock_core::{InstallPaths, Installer};
//!
//! fn main() -> appdock_core::Result<()> {
//!     let installer = Installer::new(InstallPaths::from_home()?);
//!     let report = installer.install("Downloads/Krita-5.2.2-x86_64.AppImage")?;
//!
//!     println!("Installed to {}", report.package_path.display());
//!     println!("Launcher: {}", report.desktop_entry.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod naming;
pub mod placer;
pub mod platform;
pub mod resolve;
pub mod shortcut;

mod installer;

// Re-export commonly used types
pub use config::{ExtractionConfig, InstallConfig, InstallPaths, LauncherConfig};
pub use error::{AppDockError, Result};
pub use installer::{InstallReport, Installer};
pub use placer::{place_package, Placement};
pub use resolve::resolve_package;
pub use shortcut::{DesktopEntry, IconDiscovery, IconExtractor};

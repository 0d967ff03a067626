//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live here rather than being
//! scattered through the pipeline modules.
//!
//! - `paths` - Per-user directories the installer writes into
//! - `permissions` - Execute bits and same-file detection
//!
//! AppImages only run on Linux, but the crate still builds elsewhere so the
//! pure parts (naming, descriptor rendering) can be tested anywhere.

pub mod paths;
pub mod permissions;

// Re-export commonly used items
pub use paths::{applications_dir, home_dir, icons_dir, launchers_dir};
pub use permissions::{add_executable, is_executable, is_same_file};

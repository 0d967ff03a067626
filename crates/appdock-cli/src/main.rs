//! appdock - install an AppImage into the current user's desktop.
//!
//! Moves the package to `~/Applications`, installs its icon under
//! `~/.local/share/icons`, and writes a launcher to
//! `~/.local/share/applications`.

use anyhow::Result;
use appdock_core::{InstallPaths, InstallReport, Installer};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "appdock", version)]
#[command(about = "Install an AppImage with an icon and a menu launcher")]
struct Args {
    /// Path to the AppImage to install
    package: Option<PathBuf>,

    /// Anything after the package is accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<OsString>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let Some(package) = args.package else {
        println!("{}", Args::command().render_usage());
        return Ok(ExitCode::from(1));
    };

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    if !args.ignored.is_empty() {
        debug!("Ignoring extra arguments: {:?}", args.ignored);
    }

    let installer = Installer::for_current_user()?;

    match installer.install(&package) {
        Ok(report) => print_completion(&report, installer.paths()),
        // Missing input and failed moves are reported, not treated as crashes
        Err(e) if e.is_user_facing() => error!("{}", e),
        Err(e) => return Err(e.into()),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_completion(report: &InstallReport, paths: &InstallPaths) {
    debug!("Launcher written to {}", report.desktop_entry.display());

    println!(
        "Installation Complete! You may need to log out and back in, or run \
         'update-desktop-database {}' if available.",
        paths.launchers_dir.display()
    );
}

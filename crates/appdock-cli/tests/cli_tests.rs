//! Integration tests for the appdock binary.
//!
//! Each test points `HOME` at a temp dir so the default directories resolve
//! inside it.

#![cfg(unix)]

use std::ffi::OsStr;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// See the core crate's install tests: writing a script while another thread
/// forks makes executing it fail with ETXTBSY.
static EXEC_LOCK: Mutex<()> = Mutex::new(());

fn exec_lock() -> MutexGuard<'static, ()> {
    EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn run_appdock(home: &Path, args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appdock"))
        .args(args)
        .env("HOME", home)
        .env_remove("XDG_DATA_HOME")
        .output()
        .expect("failed to run appdock")
}

/// A package whose extraction yields a single themed icon.
fn write_package(path: &Path) -> PathBuf {
    let script = "#!/bin/sh\n\
        [ \"$1\" = \"--appimage-extract\" ] || exit 2\n\
        mkdir -p squashfs-root/usr/share/icons/hicolor/256x256/apps\n\
        printf '%s' 'ICON' > squashfs-root/usr/share/icons/hicolor/256x256/apps/demo.png\n";
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, script).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_appdock(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "unexpected stdout: {stdout}");
    assert!(is_empty_dir(temp_dir.path()));
}

#[test]
fn test_missing_package_reports_and_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("Missing.AppImage");

    let output = run_appdock(temp_dir.path(), &[missing.as_os_str()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File not found"), "unexpected stdout: {stdout}");
    assert!(!temp_dir.path().join("Applications").exists());
    assert!(!temp_dir.path().join(".local").exists());
}

#[test]
fn test_extra_arguments_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("Missing.AppImage");

    let output = run_appdock(
        temp_dir.path(),
        &[missing.as_os_str(), OsStr::new("second"), OsStr::new("third")],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File not found"), "unexpected stdout: {stdout}");
    assert!(stdout.contains("Missing.AppImage"), "unexpected stdout: {stdout}");
}

#[test]
fn test_package_name_with_leading_dash_after_separator() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_appdock(
        temp_dir.path(),
        &[OsStr::new("--"), OsStr::new("-odd.AppImage")],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File not found"), "unexpected stdout: {stdout}");
}

#[test]
fn test_end_to_end_install() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    fs::create_dir_all(&home).unwrap();

    let _guard = exec_lock();
    let package = write_package(&temp_dir.path().join("Downloads").join("Demo_App.AppImage"));

    let output = run_appdock(&home, &[package.as_os_str()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Installation Complete!"), "unexpected stdout: {stdout}");

    let installed = home.join("Applications").join("Demo_App.AppImage");
    let icon = home.join(".local/share/icons/demo_app_appimage_icon.png");
    let launcher = home.join(".local/share/applications/Demo_App.desktop");

    assert!(!package.exists());
    assert!(installed.is_file());
    assert_eq!(fs::read_to_string(&icon).unwrap(), "ICON");
    assert!(!home.join("Applications/.temp_extraction").exists());

    let content = fs::read_to_string(&launcher).unwrap();
    assert!(content.contains("Name=Demo App\n"));
    assert!(content.contains(&format!("Exec={}\n", installed.display())));
    assert!(content.contains(&format!("Icon={}\n", icon.display())));
}

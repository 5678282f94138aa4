//! Runs the compiled binary against local archives

mod common;

use common::{dir_names, make_bundle, write_icon_archive};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Write a config file for the temp directory and return its path
fn write_config(root: &Path) -> PathBuf {
    let catalog = root.join("Icons");
    std::fs::create_dir_all(&catalog).unwrap();

    let config_path = root.join("config.yaml");
    std::fs::write(
        &config_path,
        format!(
            "catalog_root: '{}'\nstaging_dir: '{}'\njobs: 1\n",
            catalog.display(),
            root.join("downloads").display()
        ),
    )
    .unwrap();
    config_path
}

fn iconsync(args: &[&str], config: &Path, archive: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iconsync"))
        .args(args)
        .arg("--config")
        .arg(config)
        .arg("--archive")
        .arg(archive)
        .output()
        .expect("Failed to run iconsync")
}

#[test]
fn test_cli_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_iconsync"))
        .arg("--help")
        .output()
        .expect("Failed to execute iconsync --help");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("icons"));
    assert!(stdout.contains("names"));
}

#[test]
fn test_icons_reports_progress_and_count() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    make_bundle(&temp_dir.path().join("Icons"), "ETH_small.imageset", true);

    let archive = temp_dir.path().join("master.zip");
    write_icon_archive(&archive, &["ETH.png", "LTC.png"]);

    let output = iconsync(&["icons"], &config, &archive);
    assert_eq!(output.status.code(), Some(0), "icons command should succeed");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"Populating current list of icons"));
    assert!(stdout.contains("Unzipping downloaded icons"));
    assert!(stdout.contains("Checking for new downloaded icons"));
    assert!(stdout.contains("Created 1 new icon(s)"));
    assert_eq!(lines.last(), Some(&"Removing downloaded icons"));

    assert_eq!(
        dir_names(&temp_dir.path().join("Icons")),
        vec!["ETH_small.imageset", "LTC_small.imageset"]
    );
    assert!(!temp_dir.path().join("downloads").exists());
}

#[test]
fn test_icons_dry_run_lists_pending() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    let archive = temp_dir.path().join("master.zip");
    write_icon_archive(&archive, &["doge.png"]);

    let output = iconsync(&["icons", "--dry-run"], &config, &archive);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Would create 1 new icon(s)"));
    assert!(stdout.contains("+ DOGE"));
    assert!(dir_names(&temp_dir.path().join("Icons")).is_empty());
}

#[test]
fn test_icons_fails_on_corrupt_archive() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    let archive = temp_dir.path().join("master.zip");
    std::fs::write(&archive, b"not a zip").unwrap();

    let output = iconsync(&["icons"], &config, &archive);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("icons command failed"));
    assert!(stderr.contains("Archive error"));
    assert!(!temp_dir.path().join("downloads").exists());
}

#[test]
fn test_icons_fails_on_missing_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    std::fs::remove_dir(temp_dir.path().join("Icons")).unwrap();

    let archive = temp_dir.path().join("master.zip");
    write_icon_archive(&archive, &["btc.png"]);

    let output = iconsync(&["icons"], &config, &archive);
    assert!(!output.status.success());
    assert!(!temp_dir.path().join("downloads").exists());
}

#[test]
fn test_icons_refuses_staging_that_contains_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = temp_dir.path().join("Icons");
    make_bundle(&catalog, "ETH_small.imageset", true);

    let config = temp_dir.path().join("config.yaml");
    std::fs::write(
        &config,
        format!(
            "catalog_root: '{}'\nstaging_dir: '{}'\n",
            catalog.display(),
            temp_dir.path().join("Icons/..").display()
        ),
    )
    .unwrap();

    let archive = temp_dir.path().join("master.zip");
    write_icon_archive(&archive, &["LTC.png"]);

    let output = iconsync(&["icons"], &config, &archive);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("must not equal, contain or sit inside"));
    assert_eq!(dir_names(&catalog), vec!["ETH_small.imageset"]);
}

//! Test helper functions for integration tests
//!
//! Builds icon archives and catalogs on disk so the pipeline can run without
//! touching the network.

#![allow(dead_code)]

use iconsync::config::SyncConfig;
use image::{ImageFormat, Rgba, RgbaImage};
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use zip::write::SimpleFileOptions;

pub const ICON_DIR: &str = "cryptocurrency-icons-master/128/black/";

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A 128x128 PNG, the size the upstream archive ships
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbaImage::from_pixel(128, 128, Rgba([0, 0, 0, 255]))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// Write a zip laid out like the upstream archive.
///
/// Every name in `icons` lands in the black 128px directory. A colour
/// variant copy is added as well so the tier/variant selection is exercised.
pub fn write_icon_archive(path: &Path, icons: &[&str]) {
    let png = png_bytes();
    write_archive(path, |writer| {
        writer
            .add_directory(ICON_DIR, SimpleFileOptions::default())
            .unwrap();
        for name in icons {
            writer
                .start_file(format!("{ICON_DIR}{name}"), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(&png).unwrap();

            writer
                .start_file(
                    format!("cryptocurrency-icons-master/128/color/{name}"),
                    SimpleFileOptions::default(),
                )
                .unwrap();
            writer.write_all(&png).unwrap();
        }
    });
}

/// Like [`write_icon_archive`], with raw (possibly undecodable) contents
pub fn write_raw_icon_archive(path: &Path, files: &[(&str, &[u8])]) {
    write_archive(path, |writer| {
        for (name, data) in files {
            writer
                .start_file(format!("{ICON_DIR}{name}"), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(data).unwrap();
        }
    });
}

fn write_archive(path: &Path, fill: impl FnOnce(&mut zip::ZipWriter<File>)) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    fill(&mut writer);
    writer.finish().unwrap();
}

/// Create a bundle directory, optionally with a file in it
pub fn make_bundle(catalog: &Path, name: &str, populated: bool) -> PathBuf {
    let dir = catalog.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    if populated {
        std::fs::write(dir.join("Contents.json"), "{\"existing\": true}").unwrap();
    }
    dir
}

/// Configuration rooted in a temporary directory, with the catalog created
pub fn test_config(root: &Path) -> SyncConfig {
    let catalog_root = root.join("Icons");
    std::fs::create_dir_all(&catalog_root).unwrap();

    SyncConfig {
        catalog_root,
        staging_dir: root.join("downloads"),
        jobs: 1,
        ..SyncConfig::default()
    }
}

/// Names of the entries directly under `dir`, sorted
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

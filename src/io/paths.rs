use crate::{IconSyncError, Result};
use directories::ProjectDirs;
use std::path::{Component, Path, PathBuf};

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Platform locations for iconsync's own files
#[derive(Debug, Clone)]
pub struct IconSyncPaths {
    /// Configuration directory (e.g. `~/.config/iconsync/`)
    pub config_dir: PathBuf,
}

impl IconSyncPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "iconsync").ok_or_else(|| {
            IconSyncError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Default configuration file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

/// Utilities for working with paths
pub struct PathUtils;

impl PathUtils {
    /// Check if path is safe (no traversal attacks)
    pub fn is_safe_path(path: &Path) -> bool {
        !path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
    }

    /// Check that a value names exactly one plain path component
    pub fn is_single_component(value: &str) -> bool {
        let mut components = Path::new(value).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }

    /// Absolute form of `path` with `.` and `..` folded away.
    ///
    /// Symlinks are followed through the longest prefix that exists, so a path
    /// that is not created yet still compares equal to its final location.
    pub fn resolve(path: &Path) -> std::io::Result<PathBuf> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in absolute.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }

        let mut existing = normalized.as_path();
        let mut missing = Vec::new();
        loop {
            if let Ok(canonical) = existing.canonicalize() {
                return Ok(missing
                    .iter()
                    .rev()
                    .fold(canonical, |acc: PathBuf, name| acc.join(name)));
            }
            match (existing.parent(), existing.file_name()) {
                (Some(parent), Some(name)) => {
                    missing.push(name.to_os_string());
                    existing = parent;
                }
                _ => return Ok(normalized),
            }
        }
    }

    /// Whether one resolved path equals or contains the other
    pub fn overlaps(a: &Path, b: &Path) -> bool {
        a.starts_with(b) || b.starts_with(a)
    }
}

use super::types::SyncConfig;
use crate::io::paths::{IconSyncPaths, PathUtils};
use crate::{IconSyncError, Result};
use std::path::{Path, PathBuf};

impl SyncConfig {
    /// Load configuration from an explicit file, or from the default location.
    ///
    /// An explicit file must exist. The default file is optional; when it is
    /// absent the built-in defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(IconSyncError::Config(format!(
                        "Configuration file not found: {}",
                        path.display()
                    )));
                }
                Self::load_from_path(path)?
            }
            None => match IconSyncPaths::new() {
                Ok(paths) => Self::load_from_path(&paths.config_file())?,
                Err(e) => {
                    tracing::debug!("No platform config directory ({}); using defaults", e);
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path, falling back to defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            IconSyncError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: SyncConfig = serde_yaml_ng::from_str(&content).map_err(|e| {
            IconSyncError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject settings that would point the pipeline outside its directories
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("archive_file_name", &self.archive_file_name),
            ("archive_root", &self.archive_root),
            ("resolution_tier", &self.resolution_tier),
            ("color_variant", &self.color_variant),
        ] {
            if !PathUtils::is_single_component(value) {
                return Err(IconSyncError::Config(format!(
                    "{field} must be a single directory or file name, got '{value}'"
                )));
            }
        }

        for (field, path) in [
            ("catalog_root", &self.catalog_root),
            ("staging_dir", &self.staging_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(IconSyncError::Config(format!("{field} must not be empty")));
            }
        }

        let catalog = PathUtils::resolve(&self.catalog_root)
            .map_err(|e| IconSyncError::fs(&self.catalog_root, e))?;
        let staging = PathUtils::resolve(&self.staging_dir)
            .map_err(|e| IconSyncError::fs(&self.staging_dir, e))?;
        if PathUtils::overlaps(&staging, &catalog) {
            return Err(IconSyncError::Config(format!(
                "staging_dir {} must not equal, contain or sit inside catalog_root {}",
                self.staging_dir.display(),
                self.catalog_root.display()
            )));
        }

        if self.archive_url.is_empty() {
            return Err(IconSyncError::Config("archive_url must not be empty".to_string()));
        }

        if !PathUtils::is_safe_path(&self.icon_source_subpath()) {
            return Err(IconSyncError::Config(
                "Icon source path escapes the staging directory".to_string(),
            ));
        }

        Ok(())
    }

    /// `<archive_root>/<resolution_tier>/<color_variant>`, relative to staging
    pub fn icon_source_subpath(&self) -> PathBuf {
        PathBuf::from(&self.archive_root)
            .join(&self.resolution_tier)
            .join(&self.color_variant)
    }
}

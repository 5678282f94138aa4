//! Scoped ownership of the download/extraction directory

use crate::{IconSyncError, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Prefix of the per-run directory created under the staging directory
pub const RUN_DIR_PREFIX: &str = "iconsync-run-";

/// Staging area owned by one pipeline run.
///
/// The run works in a fresh uniquely named directory inside the configured
/// staging directory, so files already there are never touched. On `release`
/// (or on drop, if the run bails out early) the run directory is removed, and
/// the staging directory too when this run created it and it is left empty.
#[derive(Debug)]
pub struct StagingContext {
    parent: PathBuf,
    created_parent: bool,
    run_dir: Option<TempDir>,
    root: PathBuf,
}

impl StagingContext {
    /// Create the staging directory (and parents) if absent, then a run directory inside it
    pub fn acquire(parent: impl Into<PathBuf>) -> Result<Self> {
        let parent = parent.into();
        let created_parent = !parent.exists();
        std::fs::create_dir_all(&parent).map_err(|e| IconSyncError::fs(&parent, e))?;

        let run_dir = tempfile::Builder::new()
            .prefix(RUN_DIR_PREFIX)
            .tempdir_in(&parent)
            .map_err(|e| IconSyncError::fs(&parent, e))?;
        let root = run_dir.path().to_path_buf();
        tracing::debug!("Acquired staging directory {}", root.display());

        Ok(Self {
            parent,
            created_parent,
            run_dir: Some(run_dir),
            root,
        })
    }

    /// The run directory; everything the pipeline stages lives below it
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file or directory inside the staging area
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Remove the staging tree. Missing or half-removed trees are not an error.
    pub fn release(mut self) {
        self.remove_tree();
    }

    fn remove_tree(&mut self) {
        let Some(run_dir) = self.run_dir.take() else {
            return;
        };

        match run_dir.close() {
            Ok(()) => tracing::debug!("Removed staging directory {}", self.root.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                "Failed to remove staging directory {}: {}",
                self.root.display(),
                e
            ),
        }

        // Non-recursive: anything else placed there meanwhile is kept
        if self.created_parent {
            match std::fs::remove_dir(&self.parent) {
                Ok(()) => tracing::debug!("Removed {}", self.parent.display()),
                Err(e) => tracing::debug!("Keeping {}: {}", self.parent.display(), e),
            }
        }
    }
}

impl Drop for StagingContext {
    fn drop(&mut self) {
        self.remove_tree();
    }
}

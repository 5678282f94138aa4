use crate::symbol::{is_bundle_dir_name, normalize_symbol, CurrencySymbol};
use crate::{IconSyncError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read-only snapshot of the currencies already present in the catalog
pub struct LocalCatalogScanner {
    catalog_root: PathBuf,
}

impl LocalCatalogScanner {
    pub fn new(catalog_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog_root: catalog_root.into(),
        }
    }

    /// Collect symbols of every `.imageset` directory holding at least one file.
    ///
    /// Empty bundles are left out so a broken earlier run gets redone.
    pub fn scan(&self) -> Result<BTreeSet<CurrencySymbol>> {
        let entries = std::fs::read_dir(&self.catalog_root)
            .map_err(|e| IconSyncError::fs(&self.catalog_root, e))?;

        let mut symbols = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| IconSyncError::fs(&self.catalog_root, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };

            if !is_bundle_dir_name(name) || !entry.path().is_dir() {
                continue;
            }

            if !has_files(&entry.path()) {
                tracing::debug!("Treating empty bundle {} as absent", name);
                continue;
            }

            if let Some(symbol) = normalize_symbol(name) {
                symbols.insert(symbol);
            }
        }

        tracing::debug!(
            "Found {} existing icon(s) in {}",
            symbols.len(),
            self.catalog_root.display()
        );
        Ok(symbols)
    }
}

fn has_files(dir: &Path) -> bool {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .any(|e| e.file_type().is_file())
}

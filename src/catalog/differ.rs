use crate::symbol::{normalize_symbol, CurrencySymbol};
use crate::{IconSyncError, Result};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One icon image from the unpacked archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteIconFile {
    pub symbol: CurrencySymbol,
    pub path: PathBuf,
}

/// Works out which remote icons the catalog does not have yet
pub struct AssetDiffer<'a> {
    local: &'a BTreeSet<CurrencySymbol>,
}

impl<'a> AssetDiffer<'a> {
    pub fn new(local: &'a BTreeSet<CurrencySymbol>) -> Self {
        Self { local }
    }

    /// List the regular files in `icon_dir` whose symbol is not present locally.
    ///
    /// Files are visited in file-name order; sub-directories are ignored. When
    /// two files map to the same symbol only the first is kept.
    pub fn diff(&self, icon_dir: &Path) -> Result<Vec<RemoteIconFile>> {
        let mut seen = HashSet::new();
        let mut worklist = Vec::new();

        for entry in WalkDir::new(icon_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(icon_dir).to_path_buf();
                IconSyncError::fs(path, e.into())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(symbol) = entry.file_name().to_str().and_then(normalize_symbol) else {
                tracing::debug!("Ignoring {}: no symbol in file name", entry.path().display());
                continue;
            };

            if !seen.insert(symbol.clone()) {
                tracing::warn!(
                    "Ignoring {}: symbol {} already listed",
                    entry.path().display(),
                    symbol
                );
                continue;
            }

            if self.local.contains(&symbol) {
                continue;
            }

            worklist.push(RemoteIconFile {
                symbol,
                path: entry.into_path(),
            });
        }

        tracing::debug!("{} new icon(s) in {}", worklist.len(), icon_dir.display());
        Ok(worklist)
    }
}

use crate::{IconSyncError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Expands the fetched zip into the staging area
pub struct ArchiveUnpacker;

impl ArchiveUnpacker {
    /// Extract every entry of `archive` under `dest`, returning the entry count
    pub fn unpack(archive: &Path, dest: &Path) -> Result<usize> {
        let file = File::open(archive).map_err(|e| IconSyncError::fs(archive, e))?;
        let mut zip = ZipArchive::new(BufReader::new(file)).map_err(|source| {
            IconSyncError::Archive {
                path: archive.to_path_buf(),
                source,
            }
        })?;

        let entries = zip.len();
        zip.extract(dest).map_err(|source| IconSyncError::Archive {
            path: archive.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            "Extracted {} entries from {} into {}",
            entries,
            archive.display(),
            dest.display()
        );
        Ok(entries)
    }

    /// Resolve the icon directory inside the extracted tree.
    ///
    /// A missing directory means the archive layout changed upstream, which is
    /// reported instead of being mistaken for "nothing new".
    pub fn icon_dir(extracted_root: &Path, subpath: &Path) -> Result<PathBuf> {
        let dir = extracted_root.join(subpath);
        if !dir.is_dir() {
            return Err(IconSyncError::SourceLayout(subpath.to_path_buf()));
        }
        Ok(dir)
    }
}

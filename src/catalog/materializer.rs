use super::differ::RemoteIconFile;
use super::manifest::{Manifest, Scale};
use crate::config::DecodePolicy;
use crate::symbol::CurrencySymbol;
use crate::{IconSyncError, Result};
use image::imageops::{self, FilterType};
use image::ImageFormat;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// A bundle written for one new currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAssetBundle {
    pub symbol: CurrencySymbol,
    pub dir: PathBuf,
    /// 1x, 2x and 3x renditions, in that order
    pub renditions: Vec<PathBuf>,
    pub manifest: PathBuf,
}

/// An icon left out under [`DecodePolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedIcon {
    pub symbol: CurrencySymbol,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct MaterializeReport {
    pub created: Vec<IconAssetBundle>,
    pub skipped: Vec<SkippedIcon>,
}

/// Renders new icons into catalog bundles
pub struct IconMaterializer {
    catalog_root: PathBuf,
    decode_policy: DecodePolicy,
    jobs: usize,
}

impl IconMaterializer {
    pub fn new(catalog_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog_root: catalog_root.into(),
            decode_policy: DecodePolicy::default(),
            jobs: 0,
        }
    }

    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    /// Worker count; 0 picks one per CPU, 1 runs inline
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Write a bundle for every icon in the worklist.
    ///
    /// Each icon only touches its own bundle directory, so icons are rendered
    /// in parallel when more than one worker is allowed. Results are reported
    /// in worklist order. Bundles finished before a fatal error stay on disk;
    /// once one icon fails fatally, icons not yet started are left alone.
    pub fn materialize(&self, worklist: &[RemoteIconFile]) -> Result<MaterializeReport> {
        let mut report = MaterializeReport::default();
        if worklist.is_empty() {
            return Ok(report);
        }

        if self.jobs == 1 {
            for icon in worklist {
                self.settle(&mut report, icon, self.materialize_one(icon))?;
            }
            return Ok(report);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("iconsync-render-{i}"))
            .build()
            .map_err(|e| IconSyncError::WorkerPool(e.to_string()))?;

        let aborted = AtomicBool::new(false);
        let outcomes = pool.install(|| self.render_all(worklist, &aborted));

        for (icon, outcome) in worklist.iter().zip(outcomes) {
            // None: never started because another icon already failed
            if let Some(outcome) = outcome {
                self.settle(&mut report, icon, outcome)?;
            }
        }

        Ok(report)
    }

    fn render_all(
        &self,
        worklist: &[RemoteIconFile],
        aborted: &AtomicBool,
    ) -> Vec<Option<Result<IconAssetBundle>>> {
        worklist
            .par_iter()
            .map(|icon| {
                if aborted.load(Ordering::Relaxed) {
                    return None;
                }
                let outcome = self.materialize_one(icon);
                if let Err(e) = &outcome {
                    if self.is_fatal(e) {
                        aborted.store(true, Ordering::Relaxed);
                    }
                }
                Some(outcome)
            })
            .collect()
    }

    fn is_fatal(&self, error: &IconSyncError) -> bool {
        !(error.is_decode() && self.decode_policy == DecodePolicy::Skip)
    }

    fn settle(
        &self,
        report: &mut MaterializeReport,
        icon: &RemoteIconFile,
        outcome: Result<IconAssetBundle>,
    ) -> Result<()> {
        match outcome {
            Ok(bundle) => {
                tracing::debug!("Created bundle {}", bundle.dir.display());
                report.created.push(bundle);
                Ok(())
            }
            Err(e) if !self.is_fatal(&e) => {
                tracing::warn!("Skipping {}: {}", icon.symbol, e);
                report.skipped.push(SkippedIcon {
                    symbol: icon.symbol.clone(),
                    reason: e.to_string(),
                });
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Decode, resize and persist one icon plus its manifest
    pub fn materialize_one(&self, icon: &RemoteIconFile) -> Result<IconAssetBundle> {
        let source = image::ImageReader::open(&icon.path)
            .map_err(|e| IconSyncError::fs(&icon.path, e))?
            .decode()
            .map_err(|source| IconSyncError::Decode {
                path: icon.path.clone(),
                source,
            })?
            .into_rgba8();

        let dir = self.catalog_root.join(icon.symbol.bundle_dir_name());
        std::fs::create_dir_all(&dir).map_err(|e| IconSyncError::fs(&dir, e))?;

        let mut renditions = Vec::with_capacity(Scale::ALL.len());
        for scale in Scale::ALL {
            let size = scale.pixels();
            let resized = imageops::resize(&source, size, size, FilterType::Lanczos3);

            let path = dir.join(scale.file_name(&icon.symbol));
            resized
                .save_with_format(&path, ImageFormat::Png)
                .map_err(|source| IconSyncError::Encode {
                    path: path.clone(),
                    source,
                })?;
            renditions.push(path);
        }

        let manifest = Manifest::for_symbol(&icon.symbol).write_to(&dir)?;

        Ok(IconAssetBundle {
            symbol: icon.symbol.clone(),
            dir,
            renditions,
            manifest,
        })
    }
}

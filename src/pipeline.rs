//! Catalog sync pipeline
//!
//! scan catalog → fetch archive → unpack → diff → materialize → clean up
//!
//! The staging directory lives in a [`StagingContext`], so it is removed
//! whether the run finishes or stops on an error part-way through. A
//! configuration whose staging directory overlaps the catalog is refused
//! before anything is touched.

use crate::catalog::{
    AssetDiffer, IconMaterializer, LocalCatalogScanner, MaterializeReport, SkippedIcon,
};
use crate::config::SyncConfig;
use crate::remote::{ArchiveSource, ArchiveUnpacker};
use crate::staging::StagingContext;
use crate::symbol::CurrencySymbol;
use crate::Result;
use std::fmt;

/// Progress notifications, one per pipeline step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Scanning,
    Fetching { origin: String },
    Unpacking,
    Diffing,
    Materialized { created: usize, skipped: usize },
    Planned { pending: usize },
    CleaningUp,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Scanning => write!(f, "Populating current list of icons"),
            Stage::Fetching { origin } => write!(f, "Downloading latest icons from {origin}"),
            Stage::Unpacking => write!(f, "Unzipping downloaded icons"),
            Stage::Diffing => write!(f, "Checking for new downloaded icons"),
            Stage::Materialized { created, skipped: 0 } => {
                write!(f, "Created {created} new icon(s)")
            }
            Stage::Materialized { created, skipped } => {
                write!(f, "Created {created} new icon(s), skipped {skipped}")
            }
            Stage::Planned { pending } => write!(f, "Would create {pending} new icon(s)"),
            Stage::CleaningUp => write!(f, "Removing downloaded icons"),
        }
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Symbols already in the catalog before the run
    pub existing: Vec<CurrencySymbol>,
    /// Symbols the diff found missing
    pub pending: Vec<CurrencySymbol>,
    /// Symbols that received a bundle
    pub created: Vec<CurrencySymbol>,
    pub skipped: Vec<SkippedIcon>,
    pub dry_run: bool,
}

pub struct CatalogSyncPipeline<'a> {
    config: &'a SyncConfig,
    source: &'a dyn ArchiveSource,
    dry_run: bool,
}

impl<'a> CatalogSyncPipeline<'a> {
    pub fn new(config: &'a SyncConfig, source: &'a dyn ArchiveSource) -> Self {
        Self {
            config,
            source,
            dry_run: false,
        }
    }

    /// Stop after the diff; nothing is written to the catalog
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self, mut on_stage: impl FnMut(&Stage)) -> Result<SyncReport> {
        self.config.validate()?;

        on_stage(&Stage::Scanning);
        let local = LocalCatalogScanner::new(&self.config.catalog_root).scan()?;

        let staging = StagingContext::acquire(&self.config.staging_dir)?;

        on_stage(&Stage::Fetching {
            origin: self.source.describe(),
        });
        let archive = self.source.fetch_into(&staging)?;

        on_stage(&Stage::Unpacking);
        ArchiveUnpacker::unpack(&archive, staging.root())?;
        let icon_dir =
            ArchiveUnpacker::icon_dir(staging.root(), &self.config.icon_source_subpath())?;

        on_stage(&Stage::Diffing);
        let worklist = AssetDiffer::new(&local).diff(&icon_dir)?;

        let outcome = if self.dry_run {
            on_stage(&Stage::Planned {
                pending: worklist.len(),
            });
            MaterializeReport::default()
        } else {
            let outcome = IconMaterializer::new(&self.config.catalog_root)
                .with_decode_policy(self.config.on_decode_error)
                .with_jobs(self.config.jobs)
                .materialize(&worklist)?;
            on_stage(&Stage::Materialized {
                created: outcome.created.len(),
                skipped: outcome.skipped.len(),
            });
            outcome
        };

        on_stage(&Stage::CleaningUp);
        staging.release();

        Ok(SyncReport {
            existing: local.into_iter().collect(),
            pending: worklist.into_iter().map(|icon| icon.symbol).collect(),
            created: outcome.created.into_iter().map(|b| b.symbol).collect(),
            skipped: outcome.skipped,
            dry_run: self.dry_run,
        })
    }
}

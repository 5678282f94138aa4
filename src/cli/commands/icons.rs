use super::CommandHandler;
use crate::config::{DecodePolicy, SyncConfig};
use crate::pipeline::CatalogSyncPipeline;
use crate::remote::{ArchiveSource, LocalArchiveSource, RemoteArchiveFetcher};
use crate::Result;
use std::path::PathBuf;

/// Handler for the `icons` command
pub struct IconsCommand {
    pub config_path: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub staging_dir: Option<PathBuf>,
    pub url: Option<String>,
    pub archive: Option<PathBuf>,
    pub on_decode_error: Option<DecodePolicy>,
    pub jobs: Option<usize>,
    pub dry_run: bool,
}

impl CommandHandler for IconsCommand {
    fn execute(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let source = self.archive_source(&config)?;

        let report = CatalogSyncPipeline::new(&config, &*source)
            .dry_run(self.dry_run)
            .run(|stage| println!("{stage}"))?;

        if report.dry_run {
            for symbol in &report.pending {
                println!("   + {symbol}");
            }
        }

        for skipped in &report.skipped {
            eprintln!("⚠️  Skipped {}: {}", skipped.symbol, skipped.reason);
        }

        tracing::info!(
            existing = report.existing.len(),
            created = report.created.len(),
            skipped = report.skipped.len(),
            "Icon sync finished"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "icons"
    }
}

impl IconsCommand {
    /// Load the configuration file and apply command-line overrides
    pub fn resolve_config(&self) -> Result<SyncConfig> {
        let mut config = SyncConfig::load(self.config_path.as_deref())?;

        if let Some(catalog) = &self.catalog {
            config.catalog_root = catalog.clone();
        }
        if let Some(staging_dir) = &self.staging_dir {
            config.staging_dir = staging_dir.clone();
        }
        if let Some(url) = &self.url {
            config.archive_url = url.clone();
        }
        if let Some(policy) = self.on_decode_error {
            config.on_decode_error = policy;
        }
        if let Some(jobs) = self.jobs {
            config.jobs = jobs;
        }

        config.validate()?;
        tracing::debug!(
            "Catalog {} (on decode error: {}, jobs: {})",
            config.catalog_root.display(),
            config.on_decode_error,
            config.jobs
        );
        Ok(config)
    }

    fn archive_source(&self, config: &SyncConfig) -> Result<Box<dyn ArchiveSource>> {
        Ok(match &self.archive {
            Some(path) => Box::new(LocalArchiveSource::new(
                path,
                config.archive_file_name.clone(),
            )),
            None => Box::new(RemoteArchiveFetcher::new(
                config.archive_url.clone(),
                config.archive_file_name.clone(),
            )?),
        })
    }
}

use super::CommandHandler;
use crate::config::SyncConfig;
use crate::names::{sorted_lines, RemoteListingFetcher};
use crate::Result;
use std::path::PathBuf;

/// Handler for the `names` command
pub struct NamesCommand {
    pub config_path: Option<PathBuf>,
    pub url: Option<String>,
}

impl CommandHandler for NamesCommand {
    fn execute(&self) -> Result<()> {
        let url = match &self.url {
            Some(url) => url.clone(),
            None => SyncConfig::load(self.config_path.as_deref())?.names_url,
        };

        let entries = RemoteListingFetcher::new(url)?.fetch()?;
        tracing::debug!("Listing returned {} currencies", entries.len());

        for line in sorted_lines(&entries) {
            println!("{line}");
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "names"
    }
}

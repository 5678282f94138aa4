use crate::staging::StagingContext;
use crate::{IconSyncError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Where the pipeline gets its icon archive from
pub trait ArchiveSource {
    /// Place the archive inside the staging area and return its path
    fn fetch_into(&self, staging: &StagingContext) -> Result<PathBuf>;

    /// Human-readable origin for progress output
    fn describe(&self) -> String;
}

/// Downloads the icon archive over HTTP
pub struct RemoteArchiveFetcher {
    client: reqwest::blocking::Client,
    url: String,
    file_name: String,
}

impl RemoteArchiveFetcher {
    pub fn new(url: impl Into<String>, file_name: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("iconsync/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(30))
            .timeout(None)
            .build()
            .map_err(|e| IconSyncError::Network {
                url: url.clone(),
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            url,
            file_name: file_name.into(),
        })
    }

    fn network_error(&self, message: impl Into<String>) -> IconSyncError {
        IconSyncError::Network {
            url: self.url.clone(),
            message: message.into(),
        }
    }
}

impl ArchiveSource for RemoteArchiveFetcher {
    fn fetch_into(&self, staging: &StagingContext) -> Result<PathBuf> {
        let dest = staging.join(&self.file_name);
        tracing::info!("Downloading icon archive from {}", self.url);

        let mut response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| self.network_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(self.network_error(format!("HTTP {}", response.status())));
        }

        let mut file = std::fs::File::create(&dest).map_err(|e| IconSyncError::fs(&dest, e))?;
        let written = response
            .copy_to(&mut file)
            .map_err(|e| self.network_error(format!("Failed to read response body: {e}")))?;

        tracing::debug!("Saved {} bytes to {}", written, dest.display());
        Ok(dest)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Uses an archive that is already on disk
pub struct LocalArchiveSource {
    path: PathBuf,
    file_name: String,
}

impl LocalArchiveSource {
    pub fn new(path: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_name: file_name.into(),
        }
    }
}

impl ArchiveSource for LocalArchiveSource {
    fn fetch_into(&self, staging: &StagingContext) -> Result<PathBuf> {
        let dest = staging.join(&self.file_name);
        std::fs::copy(&self.path, &dest).map_err(|e| IconSyncError::fs(&self.path, e))?;

        tracing::debug!("Copied {} to {}", self.path.display(), dest.display());
        Ok(dest)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

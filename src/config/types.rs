use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CATALOG_ROOT: &str = "../CoinTicker/Assets.xcassets/Icons";
pub const DEFAULT_STAGING_DIR: &str = "./downloads";
pub const DEFAULT_ARCHIVE_URL: &str =
    "https://github.com/spothq/cryptocurrency-icons/archive/master.zip";
pub const DEFAULT_ARCHIVE_FILE_NAME: &str = "latest_icons.zip";
pub const DEFAULT_ARCHIVE_ROOT: &str = "cryptocurrency-icons-master";
pub const DEFAULT_RESOLUTION_TIER: &str = "128";
pub const DEFAULT_COLOR_VARIANT: &str = "black";
pub const DEFAULT_NAMES_URL: &str = "https://web-api.coinmarketcap.com/v1/cryptocurrency/listings/latest?convert=USD&cryptocurrency_type=all&limit=5000&sort=market_cap&sort_dir=desc";

/// What to do when a source icon cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Stop the run on the first undecodable icon
    #[default]
    Abort,
    /// Record the icon as skipped and keep going
    Skip,
}

impl std::fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodePolicy::Abort => write!(f, "abort"),
            DecodePolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Settings for both pipelines, loaded from YAML and overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Asset catalog directory holding one `.imageset` per currency
    pub catalog_root: PathBuf,

    /// Scratch directory for download and extraction, removed after each run
    pub staging_dir: PathBuf,

    /// Location of the remote icon archive
    pub archive_url: String,

    /// File name the archive is saved under inside the staging directory
    pub archive_file_name: String,

    /// Top-level directory inside the archive
    pub archive_root: String,

    pub resolution_tier: String,

    pub color_variant: String,

    pub on_decode_error: DecodePolicy,

    /// Materialization workers; 0 means one per CPU, 1 means sequential
    pub jobs: usize,

    /// Listing endpoint used by the name generator
    pub names_url: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            catalog_root: PathBuf::from(DEFAULT_CATALOG_ROOT),
            staging_dir: PathBuf::from(DEFAULT_STAGING_DIR),
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            archive_file_name: DEFAULT_ARCHIVE_FILE_NAME.to_string(),
            archive_root: DEFAULT_ARCHIVE_ROOT.to_string(),
            resolution_tier: DEFAULT_RESOLUTION_TIER.to_string(),
            color_variant: DEFAULT_COLOR_VARIANT.to_string(),
            on_decode_error: DecodePolicy::Abort,
            jobs: 0,
            names_url: DEFAULT_NAMES_URL.to_string(),
        }
    }
}

//! `Contents.json` written into every bundle

use crate::symbol::CurrencySymbol;
use crate::{IconSyncError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "Contents.json";

const IDIOM_UNIVERSAL: &str = "universal";
const MANIFEST_VERSION: u32 = 1;
const MANIFEST_AUTHOR: &str = "xcode";

/// Display scale of one rendition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    X1,
    X2,
    X3,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::X1, Scale::X2, Scale::X3];

    /// Edge length of the square rendition in pixels
    pub fn pixels(self) -> u32 {
        match self {
            Scale::X1 => 15,
            Scale::X2 => 30,
            Scale::X3 => 45,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scale::X1 => "1x",
            Scale::X2 => "2x",
            Scale::X3 => "3x",
        }
    }

    /// `BTC_small.png`, `BTC_small@2x.png`, `BTC_small@3x.png`
    pub fn file_name(self, symbol: &CurrencySymbol) -> String {
        match self {
            Scale::X1 => format!("{}.png", symbol.asset_stem()),
            _ => format!("{}@{}.png", symbol.asset_stem(), self.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ImageDescriptor>,
    pub info: ManifestInfo,
}

impl Manifest {
    /// Manifest describing the three renditions of `symbol`
    pub fn for_symbol(symbol: &CurrencySymbol) -> Self {
        let images = Scale::ALL
            .iter()
            .map(|scale| ImageDescriptor {
                idiom: IDIOM_UNIVERSAL.to_string(),
                filename: scale.file_name(symbol),
                scale: scale.label().to_string(),
            })
            .collect();

        Self {
            images,
            info: ManifestInfo {
                version: MANIFEST_VERSION,
                author: MANIFEST_AUTHOR.to_string(),
            },
        }
    }

    /// Write `Contents.json` into `bundle_dir`
    pub fn write_to(&self, bundle_dir: &Path) -> Result<PathBuf> {
        let path = bundle_dir.join(MANIFEST_FILE_NAME);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|e| IconSyncError::fs(&path, e))?;
        Ok(path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconSyncError::fs(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

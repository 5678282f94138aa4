//! Local asset catalog: what is there, what is missing, and how new bundles
//! are written.
//!
//! # Layout
//!
//! ```text
//! <catalog_root>/
//!     BTC_small.imageset/
//!         BTC_small.png       15x15  (1x)
//!         BTC_small@2x.png    30x30  (2x)
//!         BTC_small@3x.png    45x45  (3x)
//!         Contents.json       manifest
//!     ETH_small.imageset/
//!         ...
//! ```

mod differ;
mod manifest;
mod materializer;
mod scanner;

pub use differ::{AssetDiffer, RemoteIconFile};
pub use manifest::{ImageDescriptor, Manifest, ManifestInfo, Scale, MANIFEST_FILE_NAME};
pub use materializer::{IconAssetBundle, IconMaterializer, MaterializeReport, SkippedIcon};
pub use scanner::LocalCatalogScanner;

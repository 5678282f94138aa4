//! Retrieval and extraction of the remote icon archive
//!
//! ```text
//! ArchiveSource (HTTP or local zip)
//!        │  fetch_into
//!        ▼
//! <staging>/latest_icons.zip
//!        │  ArchiveUnpacker
//!        ▼
//! <staging>/<archive_root>/<tier>/<variant>/*.png
//! ```

mod fetcher;
mod unpacker;

pub use fetcher::{ArchiveSource, LocalArchiveSource, RemoteArchiveFetcher};
pub use unpacker::ArchiveUnpacker;

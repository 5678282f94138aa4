use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconSyncError {
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("Archive error in {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Icon directory not found in unpacked archive: {0}")]
    SourceLayout(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IconSyncError {
    /// Wrap an IO error with the path it happened on
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconSyncError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from decoding a source image
    pub fn is_decode(&self) -> bool {
        matches!(self, IconSyncError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, IconSyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_classification() {
        let err = IconSyncError::Decode {
            path: PathBuf::from("btc.png"),
            source: image::ImageError::IoError(std::io::Error::other("truncated")),
        };
        assert!(err.is_decode());

        let err = IconSyncError::fs("catalog", std::io::Error::other("denied"));
        assert!(!err.is_decode());
        assert!(err.to_string().contains("catalog"));
    }
}

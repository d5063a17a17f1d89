//! Storage backend selection.

use std::fmt;
use std::str::FromStr;

/// Available blob storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// S3 or an S3-compatible provider (MinIO, DigitalOcean Spaces, ...).
    S3,
    /// In-process memory store. Tests and local development only: blobs
    /// do not survive a restart and presigned URLs are not fetchable.
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::S3 => write!(f, "s3"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!(
                "Unknown storage backend '{}', expected 's3' or 'memory'",
                other
            )),
        }
    }
}

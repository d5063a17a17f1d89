//! Storage abstraction trait
//!
//! The `BlobStorage` trait is implemented by every backend (S3,
//! in-memory). Callers hold it as `Arc<dyn BlobStorage>`.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;
use vocast_core::StorageBackend;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Credential issuance failed: {0}")]
    PresignFailed(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A downloadable blob: its declared content type and length, plus a
/// byte stream. Length may be unknown for some backends.
pub struct BlobObject {
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub stream: Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>,
}

/// Blob store client.
///
/// Implementations are stateless wrappers over per-call parameters and
/// safe for concurrent use behind an `Arc`.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Issue a short-lived credential permitting one direct HTTP PUT of
    /// `key` with the declared content type.
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Issue a short-lived credential permitting one direct GET of `key`.
    ///
    /// Presigning does not verify the object exists; pair with
    /// [`BlobStorage::exists`] when a not-found outcome matters.
    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String>;

    /// Fetch a blob as a byte stream with its stored content type.
    /// A missing key is `StorageError::NotFound`, distinct from other
    /// backend faults.
    async fn download_stream(&self, key: &str) -> StorageResult<BlobObject>;

    /// Delete a blob. Deleting an already-absent key is success, so the
    /// delete workflow stays retryable.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether a blob exists.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Backend type for this store.
    fn backend_type(&self) -> StorageBackend;
}

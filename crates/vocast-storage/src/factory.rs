use crate::memory::MemoryBlobStorage;
#[cfg(feature = "storage-s3")]
use crate::s3::S3BlobStorage;
use crate::traits::{BlobStorage, StorageError, StorageResult};
use std::sync::Arc;
use vocast_core::{Config, StorageBackend};

/// Create a blob storage backend based on configuration
pub async fn create_blob_storage(config: &Config) -> StorageResult<Arc<dyn BlobStorage>> {
    match config.storage_backend() {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let bucket = config.s3_bucket().map(String::from).ok_or_else(|| {
                StorageError::ConfigError("S3_BUCKET_NAME not configured".to_string())
            })?;
            let region = config
                .s3_region()
                .map(String::from)
                .or_else(|| config.aws_region().map(String::from))
                .ok_or_else(|| {
                    StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
                })?;
            let endpoint = config.s3_endpoint().map(String::from);

            let storage = S3BlobStorage::new(bucket, region, endpoint).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        StorageBackend::Memory => Ok(Arc::new(MemoryBlobStorage::new())),
    }
}

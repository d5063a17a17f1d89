//! In-memory blob storage.
//!
//! Backs the integration tests and local development. Blobs live in a
//! process-local map; "presigned" URLs are synthetic `memory://` URLs
//! that carry the same scoping information a real credential would but
//! are not fetchable. Delete failures can be injected to exercise the
//! delete workflow's ordering guarantees.

use crate::traits::{BlobObject, BlobStorage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vocast_core::StorageBackend;

#[derive(Clone)]
struct StoredBlob {
    content_type: String,
    data: Bytes,
}

/// Memory-backed blob storage implementation
#[derive(Clone, Default)]
pub struct MemoryBlobStorage {
    blobs: Arc<Mutex<HashMap<String, StoredBlob>>>,
    fail_deletes: Arc<AtomicBool>,
}

impl MemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a blob directly into the store, standing in for the
    /// client's direct PUT against a presigned URL.
    pub fn insert(&self, key: &str, content_type: &str, data: impl Into<Bytes>) {
        self.blobs.lock().unwrap().insert(
            key.to_string(),
            StoredBlob {
                content_type: content_type.to_string(),
                data: data.into(),
            },
        );
    }

    pub fn contains(&self, key: &str) -> bool {
        self.blobs.lock().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.lock().unwrap().is_empty()
    }

    /// Make every subsequent `delete` fail with `DeleteFailed`.
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BlobStorage for MemoryBlobStorage {
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "memory://voiceovers/{}?verb=put&contentType={}&expires={}",
            key,
            content_type,
            expires_in.as_secs()
        ))
    }

    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        Ok(format!(
            "memory://voiceovers/{}?verb=get&expires={}",
            key,
            expires_in.as_secs()
        ))
    }

    async fn download_stream(&self, key: &str) -> StorageResult<BlobObject> {
        let blob = self
            .blobs
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;

        let len = blob.data.len() as u64;
        Ok(BlobObject {
            content_type: Some(blob.content_type),
            content_length: Some(len),
            stream: Box::pin(stream::once(async move { Ok(blob.data) })),
        })
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::DeleteFailed(format!(
                "Injected delete failure for {}",
                key
            )));
        }
        // Absent keys are success, matching S3 semantics.
        self.blobs.lock().unwrap().remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.blobs.lock().unwrap().contains_key(key))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn download_returns_bytes_and_content_type() {
        let storage = MemoryBlobStorage::new();
        storage.insert("song1.mp3", "audio/mpeg", &b"ID3fake-audio"[..]);

        let blob = storage.download_stream("song1.mp3").await.unwrap();
        assert_eq!(blob.content_type.as_deref(), Some("audio/mpeg"));
        assert_eq!(blob.content_length, Some(13));

        let chunks: Vec<_> = blob.stream.collect().await;
        let bytes: Vec<u8> = chunks
            .into_iter()
            .flat_map(|c| c.unwrap().to_vec())
            .collect();
        assert_eq!(bytes, b"ID3fake-audio");
    }

    #[tokio::test]
    async fn download_of_missing_key_is_not_found() {
        let storage = MemoryBlobStorage::new();
        match storage.download_stream("nope.mp3").await {
            Err(StorageError::NotFound(key)) => assert_eq!(key, "nope.mp3"),
            other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn delete_is_idempotent_in_effect() {
        let storage = MemoryBlobStorage::new();
        storage.insert("song1.mp3", "audio/mpeg", &b"x"[..]);

        storage.delete("song1.mp3").await.unwrap();
        assert!(!storage.contains("song1.mp3"));
        // Second delete of the same key also succeeds.
        storage.delete("song1.mp3").await.unwrap();
    }

    #[tokio::test]
    async fn injected_delete_failure_surfaces() {
        let storage = MemoryBlobStorage::new();
        storage.insert("song1.mp3", "audio/mpeg", &b"x"[..]);
        storage.set_fail_deletes(true);

        assert!(matches!(
            storage.delete("song1.mp3").await,
            Err(StorageError::DeleteFailed(_))
        ));
        // Blob untouched by the failed delete.
        assert!(storage.contains("song1.mp3"));
    }

    #[tokio::test]
    async fn presigned_urls_are_scoped_to_key_and_ttl() {
        let storage = MemoryBlobStorage::new();
        let url = storage
            .presigned_put_url("song1.mp3", "audio/mpeg", Duration::from_secs(300))
            .await
            .unwrap();
        assert!(url.contains("song1.mp3"));
        assert!(url.contains("expires=300"));
    }
}

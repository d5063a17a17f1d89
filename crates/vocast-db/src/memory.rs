//! In-memory voiceover store for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use vocast_core::models::{VoiceoverFilter, VoiceoverRecord};
use vocast_core::AppError;

use crate::store::VoiceoverStore;

/// Memory-backed voiceover store
#[derive(Clone, Default)]
pub struct MemoryVoiceoverStore {
    records: Arc<Mutex<HashMap<Uuid, VoiceoverRecord>>>,
}

impl MemoryVoiceoverStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl VoiceoverStore for MemoryVoiceoverStore {
    async fn put(&self, record: &VoiceoverRecord) -> Result<(), AppError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.id, record.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<VoiceoverRecord>, AppError> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.records.lock().unwrap().remove(&id).is_some())
    }

    async fn scan(&self, filter: &VoiceoverFilter) -> Result<Vec<VoiceoverRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }
}

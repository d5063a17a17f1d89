use async_trait::async_trait;
use uuid::Uuid;
use vocast_core::models::{VoiceoverFilter, VoiceoverRecord};
use vocast_core::AppError;

/// Metadata store client.
///
/// Records are immutable after creation: `put` is only ever called with
/// a fresh id, and the sole mutation afterwards is whole-record
/// deletion. No read-modify-write, so implementations need no cross-call
/// coordination.
#[async_trait]
pub trait VoiceoverStore: Send + Sync {
    /// Persist a record (whole-record write).
    async fn put(&self, record: &VoiceoverRecord) -> Result<(), AppError>;

    /// Fetch a record by id.
    async fn get(&self, id: Uuid) -> Result<Option<VoiceoverRecord>, AppError>;

    /// Delete a record by id. Returns `false` when no record matched,
    /// which callers inside the delete workflow treat as success.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Full-table scan filtered by the given predicate. Result order is
    /// unspecified; callers must not depend on it.
    async fn scan(&self, filter: &VoiceoverFilter) -> Result<Vec<VoiceoverRecord>, AppError>;
}

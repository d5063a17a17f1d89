use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use vocast_core::models::DeleteVoiceoverResponse;
use vocast_core::AppError;
use vocast_db::VoiceoverStore;
use vocast_storage::{BlobStorage, StorageError};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Delete a voiceover: both blobs first, metadata record last. If either
/// blob delete fails the record is kept, so the orphaned blobs stay
/// reachable through it and the client can retry.
#[utoipa::path(
    delete,
    path = "/voiceover/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Voiceover record id")),
    responses(
        (status = 200, description = "Voiceover deleted", body = DeleteVoiceoverResponse),
        (status = 404, description = "No such voiceover", body = ErrorResponse),
        (status = 500, description = "Blob deletion failed, record kept", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(voiceover_id = %id, operation = "delete_voiceover"))]
pub async fn delete_voiceover(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = state
        .voiceovers
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No voiceover with id {}", id)))?;

    // Both blob deletes run regardless of each other's outcome.
    let (audio_result, thumbnail_result) = tokio::join!(
        delete_blob(state.blob_storage.as_ref(), &record.audio_key),
        delete_blob(state.blob_storage.as_ref(), &record.thumbnail_key),
    );

    let mut failed = Vec::new();
    if let Err(e) = audio_result {
        tracing::error!(key = %record.audio_key, error = %e, "Audio blob delete failed");
        failed.push("audio blob");
    }
    if let Err(e) = thumbnail_result {
        tracing::error!(key = %record.thumbnail_key, error = %e, "Thumbnail blob delete failed");
        failed.push("thumbnail blob");
    }
    if !failed.is_empty() {
        return Err(AppError::Storage(format!(
            "Deletion stopped before metadata removal; failed: {}",
            failed.join(", ")
        ))
        .into());
    }

    // The record is the only back-reference to the blob keys, so it goes last.
    let removed = state.voiceovers.delete(id).await?;
    if !removed {
        tracing::warn!(voiceover_id = %id, "Record already removed by a concurrent delete");
    }

    tracing::info!(voiceover_id = %id, "Voiceover deleted");
    Ok(Json(DeleteVoiceoverResponse { id, deleted: true }))
}

/// A key with no blob behind it counts as already deleted. Records written
/// before the client finished (or ever started) its direct upload are still
/// deletable.
async fn delete_blob(storage: &dyn BlobStorage, key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Ok(());
    }
    match storage.delete(key).await {
        Ok(()) | Err(StorageError::NotFound(_)) => Ok(()),
        Err(e) => Err(e),
    }
}

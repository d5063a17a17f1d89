use std::sync::Arc;
use std::time::Duration as StdDuration;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use uuid::Uuid;
use validator::Validate;
use vocast_core::models::{UploadRequest, UploadResponse, UploadStatus, VoiceoverRecord};
use vocast_core::AppError;
use vocast_db::VoiceoverStore;
use vocast_storage::{keys, BlobStorage};

use crate::error::{ApiJson, ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Issue a pair of presigned PUT URLs (audio + thumbnail) and record the
/// voiceover metadata. The record is written before the client transfers any
/// bytes, so it shows up in listings immediately.
#[utoipa::path(
    post,
    path = "/upload-request",
    tag = "uploads",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Upload credentials issued", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(voiceover_name = %request.voiceover_name, operation = "request_upload")
)]
pub async fn request_upload(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<UploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    // File names double as storage keys, so they obey the same key rules
    // as retrieval. Rejecting here keeps unservable keys out of the catalog.
    keys::validate(&request.audio_file_name)
        .map_err(|e| AppError::InvalidInput(format!("audioFileName: {}", e)))?;
    keys::validate(&request.thumb_file_name)
        .map_err(|e| AppError::InvalidInput(format!("thumbFileName: {}", e)))?;

    let record_id = Uuid::new_v4();
    let ttl_secs = state.config.upload_url_ttl_secs();
    let ttl = StdDuration::from_secs(ttl_secs);
    let expires_at = Utc::now() + Duration::seconds(ttl_secs as i64);

    let audio_write_url = state
        .blob_storage
        .presigned_put_url(&request.audio_file_name, &request.audio_content_type, ttl)
        .await
        .map_err(|e| AppError::Storage(format!("Failed to presign audio upload: {}", e)))?;

    let thumbnail_write_url = state
        .blob_storage
        .presigned_put_url(&request.thumb_file_name, &request.thumb_content_type, ttl)
        .await
        .map_err(|e| AppError::Storage(format!("Failed to presign thumbnail upload: {}", e)))?;

    // Marked complete up front: the transfer happens directly between the
    // client and the blob store, and no confirmation callback exists.
    let record = VoiceoverRecord {
        id: record_id,
        voiceover_name: request.voiceover_name.clone(),
        project_date: request.project_date,
        date_uploaded: Utc::now(),
        audio_key: request.audio_file_name.clone(),
        thumbnail_key: request.thumb_file_name.clone(),
        status: UploadStatus::Complete,
    };
    state.voiceovers.put(&record).await?;

    tracing::info!(
        record_id = %record_id,
        audio_key = %record.audio_key,
        expires_at = %expires_at,
        "Upload credentials issued"
    );

    Ok(Json(UploadResponse {
        audio_write_url,
        thumbnail_write_url,
        record_id,
        expires_at,
    }))
}

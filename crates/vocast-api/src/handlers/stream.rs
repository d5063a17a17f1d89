use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use vocast_core::constants::{FALLBACK_AUDIO_CONTENT_TYPE, FALLBACK_THUMBNAIL_CONTENT_TYPE};
use vocast_core::{AppError, RetrievalStrategy};
use vocast_storage::{keys, BlobStorage};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Stream a voiceover's audio blob.
#[utoipa::path(
    get,
    path = "/stream/{key}",
    tag = "retrieval",
    params(("key" = String, Path, description = "Storage key of the audio blob")),
    responses(
        (status = 200, description = "Audio bytes", content_type = "audio/mpeg"),
        (status = 400, description = "Invalid key", body = ErrorResponse),
        (status = 404, description = "Blob not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "stream_audio"))]
pub async fn stream_audio(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Response, HttpAppError> {
    serve_blob(&state, &key, FALLBACK_AUDIO_CONTENT_TYPE).await
}

/// Stream a voiceover's thumbnail blob.
#[utoipa::path(
    get,
    path = "/thumbnail/{key}",
    tag = "retrieval",
    params(("key" = String, Path, description = "Storage key of the thumbnail blob")),
    responses(
        (status = 200, description = "Thumbnail bytes", content_type = "image/jpeg"),
        (status = 400, description = "Invalid key", body = ErrorResponse),
        (status = 404, description = "Blob not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "stream_thumbnail"))]
pub async fn stream_thumbnail(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Response, HttpAppError> {
    serve_blob(&state, &key, FALLBACK_THUMBNAIL_CONTENT_TYPE).await
}

async fn serve_blob(
    state: &AppState,
    raw_key: &str,
    fallback_content_type: &str,
) -> Result<Response, HttpAppError> {
    // Legacy clients encode spaces in keys as '+'.
    let key = raw_key.replace('+', " ");
    keys::validate(&key).map_err(|e| AppError::InvalidKey(e.to_string()))?;

    match state.config.retrieval_strategy() {
        RetrievalStrategy::Proxy => {
            let blob = state.blob_storage.download_stream(&key).await?;

            let content_type = blob
                .content_type
                .unwrap_or_else(|| fallback_content_type.to_string());

            let mut builder = Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::ACCEPT_RANGES, "bytes")
                .header(
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", key),
                );
            if let Some(length) = blob.content_length {
                builder = builder.header(header::CONTENT_LENGTH, length);
            }

            builder
                .body(Body::from_stream(blob.stream))
                .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)).into())
        }
        RetrievalStrategy::Redirect => {
            // Presigned GET URLs succeed even for absent keys, so existence
            // is checked first to preserve the 404 contract.
            if !state.blob_storage.exists(&key).await? {
                return Err(AppError::NotFound(format!("No blob stored under '{}'", key)).into());
            }
            let ttl = Duration::from_secs(state.config.download_url_ttl_secs());
            let url = state.blob_storage.presigned_get_url(&key, ttl).await?;
            Ok(Redirect::temporary(&url).into_response())
        }
    }
}

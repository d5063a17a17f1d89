use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request for a pair of presigned upload credentials plus a metadata
/// record. File name uniqueness is the caller's responsibility
/// (typically a timestamp prefix); keys are not checked for collisions
/// before credentials are issued.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[validate(length(min = 1, max = 255, message = "audioFileName must not be empty"))]
    pub audio_file_name: String,
    #[validate(length(min = 1, max = 255, message = "audioContentType must not be empty"))]
    pub audio_content_type: String,
    #[validate(length(min = 1, max = 255, message = "thumbFileName must not be empty"))]
    pub thumb_file_name: String,
    #[validate(length(min = 1, max = 255, message = "thumbContentType must not be empty"))]
    pub thumb_content_type: String,
    #[validate(length(min = 1, max = 255, message = "voiceoverName must not be empty"))]
    pub voiceover_name: String,
    pub project_date: NaiveDate,
}

/// Credentials handed back to the client for the direct-to-storage
/// transfer. The record is already visible in listings when this
/// response is produced.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub audio_write_url: String,
    pub thumbnail_write_url: String,
    pub record_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

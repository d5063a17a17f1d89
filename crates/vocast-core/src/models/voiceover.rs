use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle marker for a voiceover record.
///
/// A record is created in `Requested` conceptually, but the upload
/// orchestrator short-circuits straight to `Complete`: the record
/// becomes visible to readers before the client has transferred any
/// bytes. Readers must not assume `Complete` implies blob presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Requested,
    Complete,
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Requested => write!(f, "requested"),
            UploadStatus::Complete => write!(f, "complete"),
        }
    }
}

impl FromStr for UploadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(UploadStatus::Requested),
            "complete" => Ok(UploadStatus::Complete),
            other => Err(format!("Unknown upload status '{}'", other)),
        }
    }
}

/// One metadata record per uploaded voiceover. This is also the wire
/// shape returned by the list and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoiceoverRecord {
    /// Primary key, generated server-side at upload-request time.
    pub id: Uuid,
    pub voiceover_name: String,
    /// Business date associated with the content, not the upload date.
    pub project_date: NaiveDate,
    pub date_uploaded: DateTime<Utc>,
    /// Blob-store key of the audio object. Unique across live records.
    pub audio_key: String,
    /// Blob-store key of the thumbnail object. Unique across live records.
    pub thumbnail_key: String,
    pub status: UploadStatus,
}

/// Confirmation payload for a successful delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteVoiceoverResponse {
    pub id: Uuid,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VoiceoverRecord {
        VoiceoverRecord {
            id: Uuid::new_v4(),
            voiceover_name: "My Voiceover".to_string(),
            project_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            date_uploaded: Utc::now(),
            audio_key: "song1.mp3".to_string(),
            thumbnail_key: "song1.png".to_string(),
            status: UploadStatus::Complete,
        }
    }

    #[test]
    fn record_serializes_camel_case() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("voiceoverName").is_some());
        assert!(json.get("projectDate").is_some());
        assert!(json.get("dateUploaded").is_some());
        assert!(json.get("audioKey").is_some());
        assert!(json.get("thumbnailKey").is_some());
        assert_eq!(json["status"], "complete");
        assert_eq!(json["projectDate"], "2024-03-01");
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [UploadStatus::Requested, UploadStatus::Complete] {
            assert_eq!(status.to_string().parse::<UploadStatus>().unwrap(), status);
        }
        assert!("pending".parse::<UploadStatus>().is_err());
    }
}

//! Shared constants.

/// Default lifetime of a presigned PUT credential, in seconds.
pub const DEFAULT_UPLOAD_URL_TTL_SECS: u64 = 300;

/// Default lifetime of a presigned GET credential, in seconds.
pub const DEFAULT_DOWNLOAD_URL_TTL_SECS: u64 = 300;

/// Content type served for audio blobs whose stored type is unknown.
pub const FALLBACK_AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Content type served for thumbnail blobs whose stored type is unknown.
pub const FALLBACK_THUMBNAIL_CONTENT_TYPE: &str = "image/jpeg";

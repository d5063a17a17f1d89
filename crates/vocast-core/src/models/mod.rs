pub mod search;
pub mod upload;
pub mod voiceover;

pub use search::{SearchParams, VoiceoverFilter};
pub use upload::{UploadRequest, UploadResponse};
pub use voiceover::{DeleteVoiceoverResponse, UploadStatus, VoiceoverRecord};

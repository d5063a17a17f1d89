//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use vocast_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vocast API",
        version = "0.1.0",
        description = "Voiceover upload backend: presigned direct-to-storage uploads, streaming retrieval, catalog search, and ordered deletes."
    ),
    paths(
        handlers::upload_request::request_upload,
        handlers::stream::stream_audio,
        handlers::stream::stream_thumbnail,
        handlers::catalog::list_voiceovers,
        handlers::catalog::search_voiceovers,
        handlers::delete::delete_voiceover,
        handlers::health::health_check,
    ),
    components(schemas(
        models::UploadRequest,
        models::UploadResponse,
        models::VoiceoverRecord,
        models::UploadStatus,
        models::DeleteVoiceoverResponse,
        error::ErrorResponse,
        handlers::health::HealthCheckResponse,
    )),
    tags(
        (name = "uploads", description = "Presigned upload credential issuance"),
        (name = "retrieval", description = "Audio and thumbnail streaming"),
        (name = "catalog", description = "Voiceover listing, search, and deletion"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

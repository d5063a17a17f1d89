//! Route assembly and HTTP middleware

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use vocast_core::Config;

use crate::handlers;
use crate::state::AppState;

/// Assemble the full router. Takes the state it serves so integration tests
/// can mount the same routes over in-memory backends.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> anyhow::Result<Router> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route("/upload-request", post(handlers::upload_request::request_upload))
        .route("/stream/{key}", get(handlers::stream::stream_audio))
        .route("/thumbnail/{key}", get(handlers::stream::stream_thumbnail))
        .route("/voiceovers", get(handlers::catalog::list_voiceovers))
        .route("/voiceovers/search", get(handlers::catalog::search_voiceovers))
        .route("/voiceover/{id}", delete(handlers::delete::delete_voiceover))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::ApiDoc::openapi()) }),
        )
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs")
                .into(),
        )
        // Request bodies here are small JSON payloads; file bytes go directly
        // to the blob store over the presigned URLs.
        .layer(RequestBodyLimitLayer::new(config.max_request_body_bytes()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// PUT is allowed so browsers can preflight direct-to-storage uploads
/// through the same origin policy the API advertises.
fn setup_cors(config: &Config) -> anyhow::Result<CorsLayer> {
    let methods = [
        Method::GET,
        Method::HEAD,
        Method::PUT,
        Method::POST,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let cors = if config.cors_origins().contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins()
            .iter()
            .map(|o| o.parse())
            .collect::<Result<_, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use vocast_core::models::{SearchParams, VoiceoverFilter, VoiceoverRecord};
use vocast_db::VoiceoverStore;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// List every voiceover record.
#[utoipa::path(
    get,
    path = "/voiceovers",
    tag = "catalog",
    responses(
        (status = 200, description = "All voiceover records", body = [VoiceoverRecord]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_voiceovers"))]
pub async fn list_voiceovers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.voiceovers.scan(&VoiceoverFilter::default()).await?;
    tracing::debug!(count = records.len(), "Listed voiceovers");
    Ok(Json(records))
}

/// Search voiceovers by name fragment and/or project date range. All given
/// criteria must match; a date range takes effect only when both bounds are
/// present.
#[utoipa::path(
    get,
    path = "/voiceovers/search",
    tag = "catalog",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching voiceover records", body = [VoiceoverRecord]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, params), fields(operation = "search_voiceovers"))]
pub async fn search_voiceovers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, HttpAppError> {
    let filter = VoiceoverFilter::from_params(&params);
    let records = state.voiceovers.scan(&filter).await?;
    tracing::debug!(count = records.len(), "Search complete");
    Ok(Json(records))
}

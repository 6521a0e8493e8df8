//! Main application router.

use crate::responses::{ok, ApiResult, AppError};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use cachet_cache::Record;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters accepted when writing a record.
#[derive(Debug, Default, Deserialize)]
pub struct PutRecordParams {
    /// TTL in seconds; `0` disables expiry, absent uses the configured default.
    pub ttl_secs: Option<u64>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/records/:id", get(get_record).put(put_record))
        .with_state(state);

    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_router)
        .layer(TraceLayer::new_for_http());

    info!("Router created with record endpoints under /api/v1");
    router
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns the record cached under `id`, or 404 when nothing is cached.
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Record> {
    let key = state.keys.record(&id);
    match state.cache.get::<Record>(&key).await? {
        Some(record) => ok(record),
        None => Err(AppError::NotFound(key)),
    }
}

/// Stores a record under `id`, replacing any existing entry.
pub async fn put_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<PutRecordParams>,
    Json(record): Json<Record>,
) -> Result<StatusCode, AppError> {
    let key = state.keys.record(&id);
    let ttl = params.ttl_secs.map_or(state.default_ttl, Duration::from_secs);
    state.cache.set(&key, ttl, &record).await?;
    Ok(StatusCode::NO_CONTENT)
}

use super::types::{ErrorResponse, HealthResponse};
use crate::{
    Error,
    gateway::{ProxyQuery, Upstream, validate_path},
};
use axum::{
    body::Bytes,
    extract::{Query, State, rejection::BytesRejection},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const FETCH_FAILED: &str = "Failed to fetch data";
pub const POST_FAILED: &str = "Failed to post data";
pub const INVALID_PATH: &str = "Invalid path";

type ProxyResult = Result<Json<Value>, (StatusCode, Json<ErrorResponse>)>;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
}

pub async fn proxy_get(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> ProxyResult {
    let query = ProxyQuery::from_pairs(params);
    let request_id = Uuid::new_v4();
    info!("Proxying GET '{}' (request {})", query.path, request_id);

    reject_invalid_path(&query.path, request_id)?;

    match state.upstream.forward_get(&query.path, &headers).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => Err(failure(e, FETCH_FAILED, request_id)),
    }
}

pub async fn proxy_post(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ProxyResult {
    let query = ProxyQuery::from_pairs(params);
    let request_id = Uuid::new_v4();
    info!("Proxying POST '{}' (request {})", query.path, request_id);

    reject_invalid_path(&query.path, request_id)?;

    // Oversized or unreadable bodies answer like any other POST failure.
    let body = body.map_err(|e| failure(Error::Body(e.body_text()), POST_FAILED, request_id))?;

    // Parsed by hand so a malformed body gets the same answer as an upstream failure.
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| failure(Error::from(e), POST_FAILED, request_id))?;

    match state
        .upstream
        .forward_post(&query.path, &headers, &payload)
        .await
    {
        Ok(body) => Ok(Json(body)),
        Err(e) => Err(failure(e, POST_FAILED, request_id)),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn reject_invalid_path(
    path: &str,
    request_id: Uuid,
) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    validate_path(path).map_err(|e| failure(e, INVALID_PATH, request_id))
}

fn failure(e: Error, message: &str, request_id: Uuid) -> (StatusCode, Json<ErrorResponse>) {
    if e.is_client_error() {
        warn!("Rejected request {}: {}", request_id, e);
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: INVALID_PATH.to_string(),
            }),
        );
    }

    error!("Request {} failed: {}", request_id, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

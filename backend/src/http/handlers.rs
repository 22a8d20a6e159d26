//! HTTP handlers for the REST API.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use tracing::{debug, error};

use super::dto::HealthResponse;
use super::error::AppError;
use super::openapi;
use super::state::AppState;
use crate::api::OutputRecord;
use crate::routes::ucd::{QueryParameters, RawUcdQuery};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /healthz
///
/// Liveness probe. Always 200 with an empty body; does not touch the glyph store.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Reports whether the glyph store is reachable, with connection pool usage.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
        pool: state.repository.pool_status(),
    }))
}

// =============================================================================
// Unicode Character Directory
// =============================================================================

/// GET /5.2.0/ucd
///
/// Query parameters are read leniently: unknown keys are ignored, repeated
/// keys keep their first value and malformed values fall back to defaults.
pub async fn ucd(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = QueryParameters::from_raw(&RawUcdQuery::from_pairs(&pairs));
    debug!(
        codepoints = params.codepoints.len(),
        fields = params.requested_fields.len(),
        limit = params.limit,
        offset = params.offset,
        "ucd lookup"
    );

    match services::lookup_glyphs(state.repository.as_ref(), &params).await {
        Ok(records) => encode_records(&records),
        Err(e) => {
            error!("Failed to query glyphs: {}", e);
            state.failure_policy.respond(e)
        }
    }
}

/// Serialize records as a compact JSON array with `application/json`.
pub fn encode_records(records: &[OutputRecord]) -> Response {
    match serde_json::to_vec(records) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => AppError::Internal(format!("Failed to encode response: {}", e)).into_response(),
    }
}

// =============================================================================
// API documentation
// =============================================================================

/// GET /swagger/doc.json
pub async fn api_doc() -> Json<serde_json::Value> {
    Json(openapi::document())
}

/// GET /swagger/ and /swagger/index.html
pub async fn swagger_ui() -> Html<String> {
    Html(openapi::ui_page())
}

/// GET /swagger
pub async fn swagger_redirect() -> Redirect {
    Redirect::permanent(openapi::UI_PATH)
}

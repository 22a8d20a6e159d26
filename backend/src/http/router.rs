//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::openapi::{DOC_PATH, UI_PATH};
use super::state::AppState;
use crate::routes::ucd::UCD_PATH;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Public read-only API: any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/health", get(handlers::health_check))
        .route(DOC_PATH, get(handlers::api_doc))
        .route(UI_PATH, get(handlers::swagger_ui))
        .route("/swagger/", get(handlers::swagger_ui))
        .route("/swagger", get(handlers::swagger_redirect))
        .route(UCD_PATH, get(handlers::ucd))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::GlyphRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn GlyphRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
    }
}

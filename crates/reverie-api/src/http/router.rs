//! Axum router configuration with middleware.
//!
//! One submit route, a liveness probe, CORS, and request tracing. The
//! endpoint accepts POST (submit), GET (probe), and OPTIONS (preflight,
//! answered by the CORS layer); everything else gets a JSON 405.

use axum::http::{header, Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Wildcard origin so a separately hosted front-end can reach the
    // endpoint; only the content-type header is needed for JSON bodies.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/dream",
            post(handlers::dream::submit_dream).get(handlers::dream::probe),
        )
        .route("/health", get(handlers::dream::probe))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Reject any method the endpoint does not serve, as JSON.
async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

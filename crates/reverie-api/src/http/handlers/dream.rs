//! Dream reflection endpoint handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::Instrument;

use reverie_observe::genai_attrs;
use reverie_types::dream::ReflectionResponse;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/dream - Submit a dream narration for reflection.
pub async fn submit_dream(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReflectionResponse>, AppError> {
    let request_id = uuid::Uuid::now_v7().to_string();

    // An absent or unparsable body carries no dream text; the validator
    // turns it into the canonical client error.
    let body = match body {
        Ok(Json(value)) => value,
        Err(_) => Value::Null,
    };

    let span = tracing::info_span!(
        "reflect",
        request_id = %request_id,
        gen_ai.operation.name = genai_attrs::OP_REFLECT,
        gen_ai.provider.name = state.service.provider(),
        gen_ai.request.model = state.service.model(),
    );

    let reflection = state.service.reflect(&body).instrument(span).await?;

    Ok(Json(ReflectionResponse { reflection }))
}

/// GET /api/dream and GET /health - Static liveness payload.
pub async fn probe() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_payload_shape() {
        let Json(payload) = probe().await;
        assert_eq!(payload["status"], "ok");
        assert!(payload["version"].is_string());
    }
}

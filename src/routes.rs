use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::pipeline::{InvocationEvent, ResponseEnvelope};
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Pipeline, plain HTTP
        .route("/api/labels", get(detect_labels))
        // Pipeline, function-style event in and envelope out
        .route("/invoke", post(invoke))
}

/// Full application with middleware, ready to serve
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn detect_labels(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let event = InvocationEvent {
        query_string_parameters: Some(params),
    };
    let envelope = state.pipeline.handle(&event).await;

    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, envelope.body)
}

async fn invoke(
    State(state): State<AppState>,
    payload: Result<Json<InvocationEvent>, JsonRejection>,
) -> Json<ResponseEnvelope> {
    match payload {
        Ok(Json(event)) => Json(state.pipeline.handle(&event).await),
        Err(rejection) => {
            warn!(kind = "input", "Rejected malformed event: {}", rejection);
            Json(ResponseEnvelope::internal_error())
        }
    }
}

//! HTTP Handlers

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Serialize;

use lex_core::{DialogResponse, FulfillmentError, IntentRequest, InvocationContext};

use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub intents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        intents: state.registry.names().into_iter().map(String::from).collect(),
    })
}

/// Code hook endpoint: one platform event in, one dialog response out
pub async fn fulfill(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<DialogResponse>, ApiError> {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);
    let context = InvocationContext::with_request_id(request_id);

    let event: IntentRequest = serde_json::from_str(&body)
        .map_err(|e| error_response(&FulfillmentError::from(e), &context))?;

    state
        .registry
        .dispatch_with_context(&event, &context)
        .map(Json)
        .map_err(|e| error_response(&e, &context))
}

fn error_response(err: &FulfillmentError, context: &InvocationContext) -> ApiError {
    let request_id = context.request_id.as_deref().unwrap_or("-");
    let status = if err.is_bad_request() {
        tracing::warn!(request_id, "Rejected code hook event: {}", err);
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!(request_id, "Code hook failed: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: err.code().into(),
        }),
    )
}

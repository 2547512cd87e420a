//! musebox-api - HTTP surface for the musebox evaluation relay.
//!
//! One endpoint: `POST /` accepts an agent's evaluation result and forwards
//! it through the two-phase writer. Every other method on the endpoint gets
//! a 405. The router and state are exposed so tests can drive the handler
//! in-process with a substituted record store.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use uuid::Uuid;

use musebox_core::{EvaluationRequest, RecordStore, TwoPhaseWriter, WriteError};

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// The backing writer, or the configuration error that prevented building one.
///
/// A missing credential or database id does not stop the server; it fails
/// closed, answering every request with the stored error until the
/// environment is fixed and the process restarted.
#[derive(Clone)]
enum Backend {
    Ready(TwoPhaseWriter),
    Unconfigured(String),
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    backend: Backend,
}

impl AppState {
    /// State backed by a record store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            backend: Backend::Ready(TwoPhaseWriter::new(store)),
        }
    }

    /// Fail-closed state: every request gets a 500 carrying `message`.
    pub fn unconfigured(message: impl Into<String>) -> Self {
        Self {
            backend: Backend::Unconfigured(message.into()),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(evaluate).fallback(method_not_allowed))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 405 for every non-POST method on the endpoint.
async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Method Not Allowed" })),
    )
        .into_response()
}

/// Validate the payload and run the create-then-enrich sequence.
async fn evaluate(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let writer = match &state.backend {
        Backend::Ready(writer) => writer,
        Backend::Unconfigured(message) => {
            warn!(reason = %message, "Rejecting request: service unconfigured");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": message })),
            )
                .into_response();
        }
    };

    let request = match EvaluationRequest::from_json(&body) {
        Ok(request) => request,
        Err(missing) => {
            // Echo the offending payload back for caller debuggability
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("Missing or empty required fields: {}", missing.join(", ")),
                    "received": body,
                })),
            )
                .into_response();
        }
    };

    match writer.write(&request).await {
        Ok(receipt) => {
            info!(record_id = %receipt.record_id, priority = %receipt.priority, "Evaluation relayed");
            (
                StatusCode::OK,
                Json(json!({
                    "status": "success",
                    "message": format!(
                        "Notion page {} created and updated successfully.",
                        receipt.record_id
                    ),
                    "priority": receipt.priority,
                })),
            )
                .into_response()
        }
        Err(err) => {
            let message = match &err {
                WriteError::Create { .. } => "Failed to create Notion page",
                WriteError::Enrich { .. } => "Notion page created but enrichment failed",
            };
            warn!(
                record_id = err.record_id().unwrap_or("<none>"),
                error = %err,
                "Two-phase write failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": message,
                    "details": err.details(),
                    "notionItemId": err.record_id(),
                })),
            )
                .into_response()
        }
    }
}

//! HTTP interface: axum router and the error-to-response mapping.

pub mod transactions;

use crate::application::service::TransactionService;
use crate::error::LedgerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TransactionService>,
}

/// Builds the service router.
pub fn router(service: Arc<TransactionService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route(
            "/transactions",
            post(transactions::create).get(transactions::list_all),
        )
        .route(
            "/transactions/:id",
            get(transactions::get_by_id).put(transactions::update_status),
        )
        .route(
            "/transactions/:id/release-escrow",
            post(transactions::release_escrow),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Wrapper giving `LedgerError` an HTTP representation.
///
/// Input-validation failures are JSON `{"error": …}` bodies; the lookup and
/// escrow failures are plain text, matching the public API. `NotFound` maps to
/// 404 here; mutation paths downgrade it to 400 (see `mutation_response`).
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            LedgerError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            err @ LedgerError::NotFound(_) => {
                (StatusCode::NOT_FOUND, err.to_string()).into_response()
            }
            err @ (LedgerError::NotEscrow(_) | LedgerError::ConditionNotMet) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            LedgerError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}

use super::{ApiError, AppState};
use crate::application::service::{CreateTransaction, ReleaseEscrow, UpdateStatus};
use crate::domain::transaction::PaymentTransaction;
use crate::error::LedgerError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// POST /transactions
pub async fn create(
    State(state): State<AppState>,
    Json(cmd): Json<CreateTransaction>,
) -> Result<Json<PaymentTransaction>, ApiError> {
    let tx = state.service.create(cmd).await?;
    Ok(Json(tx))
}

/// GET /transactions
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentTransaction>>, ApiError> {
    let all = state.service.list_all().await?;
    Ok(Json(all))
}

/// GET /transactions/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PaymentTransaction>, ApiError> {
    let tx = state.service.get_by_id(&id).await?;
    Ok(Json(tx))
}

/// PUT /transactions/:id
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(cmd): Json<UpdateStatus>,
) -> Response {
    mutation_response(state.service.update_status(&id, cmd).await)
}

/// POST /transactions/:id/release-escrow
pub async fn release_escrow(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(cmd): Json<ReleaseEscrow>,
) -> Response {
    mutation_response(state.service.release_escrow(&id, cmd).await)
}

/// Mutation paths report unknown ids as 400 plain text rather than 404; only
/// the direct lookup returns 404. Pinned to the public API as observed.
fn mutation_response(result: crate::error::Result<PaymentTransaction>) -> Response {
    match result {
        Ok(tx) => Json(tx).into_response(),
        Err(err @ LedgerError::NotFound(_)) => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(err) => ApiError(err).into_response(),
    }
}

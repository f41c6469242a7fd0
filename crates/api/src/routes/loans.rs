//! Member-facing loan routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{AppState, routes::error_response};
use stridebank_shared::types::UserId;

/// Creates the loan routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts/{id}/loans", post(request_loan))
        .route("/accounts/{id}/loans/acknowledge", post(acknowledge))
}

/// Request body for a loan application.
#[derive(Debug, Deserialize)]
pub struct RequestLoanRequest {
    /// Requested amount.
    pub amount: Decimal,
    /// Stated purpose of the loan.
    pub reason: String,
}

/// POST `/accounts/{id}/loans` - Submit a loan application.
async fn request_loan(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(payload): Json<RequestLoanRequest>,
) -> impl IntoResponse {
    match state.loans.request_loan(id, payload.amount, &payload.reason) {
        Ok(outcome) => {
            info!(account_id = %id, amount = %payload.amount, "Loan requested");
            (
                StatusCode::CREATED,
                Json(json!({
                    "account": outcome.account,
                    "transaction": outcome.record,
                })),
            )
                .into_response()
        }
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

/// POST `/accounts/{id}/loans/acknowledge` - Dismiss a decided application.
async fn acknowledge(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> impl IntoResponse {
    match state.loans.acknowledge(id) {
        Ok(account) => (StatusCode::OK, Json(json!({ "account": account }))).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

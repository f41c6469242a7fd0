//! Account signup and lookup routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::{AppState, routes::error_response};
use stridebank_core::account::SubscriptionTier;
use stridebank_core::store::Store;
use stridebank_shared::types::UserId;

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(open_account))
        .route("/accounts/{id}", get(get_account))
        .route("/accounts/{id}/transactions", get(list_transactions))
}

/// Request body for opening an account.
#[derive(Debug, Deserialize, Validate)]
pub struct OpenAccountRequest {
    /// Display name of the new member.
    pub name: String,
    /// Email address used for login.
    #[validate(email)]
    pub email: String,
    /// Initial subscription tier (defaults to `BASIC`).
    #[serde(default)]
    pub tier: Option<SubscriptionTier>,
}

/// POST `/accounts` - Open an account with the welcome bonus.
async fn open_account(
    State(state): State<AppState>,
    Json(payload): Json<OpenAccountRequest>,
) -> impl IntoResponse {
    if payload.validate().is_err() {
        return error_response(
            400,
            "VALIDATION_ERROR",
            "A valid email address is required".to_string(),
        );
    }

    let tier = payload.tier.unwrap_or(SubscriptionTier::Basic);
    match state.accounts.open_account(&payload.name, &payload.email, tier) {
        Ok(opened) => {
            info!(account_id = %opened.account.id, "Account opened");
            (
                StatusCode::CREATED,
                Json(json!({
                    "account": opened.account,
                    "transaction": opened.record,
                })),
            )
                .into_response()
        }
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

/// GET `/accounts/{id}` - Fetch one account.
async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> impl IntoResponse {
    match state.store.account(id) {
        Ok(account) => (StatusCode::OK, Json(json!({ "account": account }))).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

/// GET `/accounts/{id}/transactions` - Per-account ledger, newest first.
async fn list_transactions(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> impl IntoResponse {
    // Surface unknown accounts as 404 rather than an empty list.
    if let Err(e) = state.store.account(id) {
        return error_response(e.status_code(), e.error_code(), e.to_string());
    }

    match state.store.entries_for(id) {
        Ok(entries) => {
            (StatusCode::OK, Json(json!({ "transactions": entries }))).into_response()
        }
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

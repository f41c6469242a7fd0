//! Administrative terminal routes.
//!
//! Every handler resolves the acting account from the `x-account-id` header
//! and defers the role check to [`stridebank_core::admin::AdminService`].

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{AppState, extractors::ActorId, routes::error_response};
use stridebank_core::account::SubscriptionTier;
use stridebank_core::loan::LoanDecision;
use stridebank_core::subscription::TierSwitchOutcome;
use stridebank_shared::types::UserId;

/// Creates the admin routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/loans/pending", get(list_pending_loans))
        .route("/admin/loans/{id}/decision", post(decide_loan))
        .route("/admin/accounts/{id}/tier", put(override_tier))
        .route("/admin/transactions", get(list_all_transactions))
        .route("/admin/accounts", get(list_accounts))
}

/// Request body for a loan decision.
#[derive(Debug, Deserialize)]
pub struct DecideLoanRequest {
    /// `APPROVED` or `REJECTED`.
    pub decision: LoanDecision,
}

/// Request body for a tier override.
#[derive(Debug, Deserialize)]
pub struct OverrideTierRequest {
    /// Target subscription tier.
    pub tier: SubscriptionTier,
}

/// GET `/admin/loans/pending` - Pending applications with activity scores.
async fn list_pending_loans(
    State(state): State<AppState>,
    actor: ActorId,
) -> impl IntoResponse {
    match state.admin.list_pending_loans(actor.0) {
        Ok(pending) => (StatusCode::OK, Json(json!({ "loans": pending }))).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

/// POST `/admin/loans/{id}/decision` - Approve or reject an application.
async fn decide_loan(
    State(state): State<AppState>,
    actor: ActorId,
    Path(id): Path<UserId>,
    Json(payload): Json<DecideLoanRequest>,
) -> impl IntoResponse {
    match state.admin.decide_loan(actor.0, id, payload.decision) {
        Ok(outcome) => {
            info!(account_id = %id, decision = %payload.decision, "Loan decided");
            (
                StatusCode::OK,
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

/// PUT `/admin/accounts/{id}/tier` - Override a member's tier (never billed).
async fn override_tier(
    State(state): State<AppState>,
    actor: ActorId,
    Path(id): Path<UserId>,
    Json(payload): Json<OverrideTierRequest>,
) -> impl IntoResponse {
    match state.admin.override_tier(actor.0, id, payload.tier) {
        Ok(TierSwitchOutcome::Switched { account, record, .. }) => {
            info!(account_id = %id, tier = %payload.tier, "Tier overridden");
            (
                StatusCode::OK,
                Json(json!({
                    "account": account,
                    "transaction": record,
                })),
            )
                .into_response()
        }
        Ok(TierSwitchOutcome::Unchanged(account)) => (
            StatusCode::OK,
            Json(json!({
                "account": account,
                "transaction": null,
            })),
        )
            .into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

/// GET `/admin/transactions` - Full audit log, newest first.
async fn list_all_transactions(
    State(state): State<AppState>,
    actor: ActorId,
) -> impl IntoResponse {
    match state.admin.list_all_transactions(actor.0) {
        Ok(entries) => {
            (StatusCode::OK, Json(json!({ "transactions": entries }))).into_response()
        }
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

/// GET `/admin/accounts` - Every account, for the user management table.
async fn list_accounts(State(state): State<AppState>, actor: ActorId) -> impl IntoResponse {
    match state.admin.list_accounts(actor.0) {
        Ok(accounts) => (StatusCode::OK, Json(json!({ "accounts": accounts }))).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

//! Self-service subscription tier routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{AppState, routes::error_response};
use stridebank_core::account::SubscriptionTier;
use stridebank_core::subscription::{TierSwitchActor, TierSwitchOutcome};
use stridebank_shared::types::UserId;

/// Creates the subscription routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/accounts/{id}/subscription", post(switch_tier))
}

/// Request body for a tier switch.
#[derive(Debug, Deserialize)]
pub struct SwitchTierRequest {
    /// Target subscription tier.
    pub tier: SubscriptionTier,
}

/// POST `/accounts/{id}/subscription` - Switch the member's own tier.
async fn switch_tier(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(payload): Json<SwitchTierRequest>,
) -> impl IntoResponse {
    match state
        .subscriptions
        .switch_tier(id, payload.tier, TierSwitchActor::SelfService)
    {
        Ok(TierSwitchOutcome::Switched { account, record, .. }) => {
            info!(account_id = %id, tier = %payload.tier, "Subscription switched");
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

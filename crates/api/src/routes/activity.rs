//! Activity sync route backing the fitness reward flow.

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
use stridebank_shared::types::UserId;

/// Creates the activity routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/accounts/{id}/activity/sync", post(sync_activity))
}

/// Request body for an activity sync.
#[derive(Debug, Deserialize)]
pub struct SyncActivityRequest {
    /// Steps walked since the previous sync.
    pub steps: u64,
}

/// POST `/accounts/{id}/activity/sync` - Convert steps into a savings transfer.
async fn sync_activity(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(payload): Json<SyncActivityRequest>,
) -> impl IntoResponse {
    match state.reward.sync_activity(id, payload.steps).await {
        Ok(outcome) => {
            info!(
                account_id = %id,
                steps = payload.steps,
                reward = %outcome.record.amount,
                "Activity synced"
            );
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

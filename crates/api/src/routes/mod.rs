//! API route definitions.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, response::Response};
use serde_json::json;

use crate::AppState;

pub mod accounts;
pub mod activity;
pub mod admin;
pub mod health;
pub mod loans;
pub mod subscription;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(activity::routes())
        .merge(loans::routes())
        .merge(subscription::routes())
        .merge(admin::routes())
}

/// Renders a service error as `{ "error": CODE, "message": text }` with the
/// error's own status code.
pub(crate) fn error_response(status: u16, code: &str, message: String) -> Response {
    let status =
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": code, "message": message }))).into_response()
}

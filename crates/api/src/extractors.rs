//! Request extractors.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

use stridebank_shared::types::UserId;

/// Header naming the account a request acts as.
pub const ACCOUNT_ID_HEADER: &str = "x-account-id";

/// Extractor for the acting account.
///
/// Identity is asserted, not verified: the client names its account in the
/// `x-account-id` header and role checks happen in the core services.
///
/// ```ignore
/// async fn handler(actor: ActorId) -> impl IntoResponse {
///     let user_id = actor.0;
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ActorId(pub UserId);

impl<S> FromRequestParts<S> for ActorId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(raw) = parts
            .headers
            .get(ACCOUNT_ID_HEADER)
            .and_then(|h| h.to_str().ok())
        else {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "MISSING_ACCOUNT_HEADER",
                    "message": "x-account-id header is required"
                })),
            )
                .into_response());
        };

        match raw.parse::<Uuid>() {
            Ok(id) => Ok(Self(UserId::from_uuid(id))),
            Err(_) => Err((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "INVALID_ACCOUNT_HEADER",
                    "message": "x-account-id must be a UUID"
                })),
            )
                .into_response()),
        }
    }
}

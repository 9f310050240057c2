use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated principal resolved by the identity service. Lives in the
/// request's extensions for the duration of that one request only.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
struct AuthorizeResponse {
    /// Decoded as present/absent rather than a zero sentinel, so an id of 0
    /// is a valid identity while a missing field is not.
    #[serde(rename = "userId")]
    user_id: Option<i64>,
}

/// Authentication middleware for protected routes: delegates the bearer
/// credential to the identity service and injects the resolved principal.
/// Every failure mode collapses to 401 -- the caller is not told whether the
/// token was invalid or the identity service was unreachable.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let Some(auth_header) = auth_header else {
        return Err(ApiError::unauthorized("Missing Authorization header"));
    };

    let response = state.auth.authorize(&auth_header).await.map_err(|err| {
        tracing::warn!("Authorize call failed: {}", err);
        ApiError::unauthorized("Unauthorized")
    })?;

    if response.status() != StatusCode::OK {
        return Err(ApiError::unauthorized("Unauthorized"));
    }

    let body: AuthorizeResponse = response.json().await.map_err(|err| {
        tracing::warn!("Failed to decode authorize response: {}", err);
        ApiError::unauthorized("Unauthorized")
    })?;

    let Some(user_id) = body.user_id else {
        return Err(ApiError::unauthorized("Unauthorized"));
    };

    request.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(request).await)
}

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Response,
};
use reqwest::Method;

use crate::error::ApiError;
use crate::handlers::{authorization, content_type, forward_response};
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    tracing::info!("Register user");

    let response = state.auth.register(content_type(&headers), body.to_vec()).await?;
    Ok(forward_response(response).await)
}

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    tracing::info!("Login user");

    let response = state.auth.login(content_type(&headers), body.to_vec()).await?;
    Ok(forward_response(response).await)
}

pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    tracing::info!("Get logged user");

    let response = state
        .auth
        .user(Method::GET, content_type(&headers), None, authorization(&headers))
        .await?;
    Ok(forward_response(response).await)
}

pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    tracing::info!("Update logged user");

    let response = state
        .auth
        .user(
            Method::PUT,
            content_type(&headers),
            Some(body.to_vec()),
            authorization(&headers),
        )
        .await?;
    Ok(forward_response(response).await)
}

pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    tracing::info!("Delete logged user");

    let response = state
        .auth
        .user(Method::DELETE, content_type(&headers), None, authorization(&headers))
        .await?;
    Ok(forward_response(response).await)
}

use axum::{extract::State, response::Response};

use crate::error::ApiError;
use crate::handlers::forward_response;
use crate::state::AppState;

pub async fn get_today_quote(State(state): State<AppState>) -> Result<Response, ApiError> {
    tracing::info!("Get today's quote");

    let response = state.quote.today().await?;
    Ok(forward_response(response).await)
}

pub mod advice;
pub mod auth;
pub mod mood;
pub mod quote;

use axum::{
    body::Body,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ApiError;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Relays a downstream response to the original caller unmodified: status,
/// content type, and body byte-for-byte.
pub async fn forward_response(response: reqwest::Response) -> Response {
    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();

    let body = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("Failed to read downstream response body: {}", err);
            return ApiError::bad_gateway("Failed to read downstream response").into_response();
        }
    };

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Query parameters accepted by every period-scoped endpoint.
#[derive(Debug, Deserialize)]
pub struct TimeframeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Validates the `from`/`to` pair before any downstream call: both present,
/// both YYYY-MM-DD, and `from` not after `to`.
pub fn parse_timeframe(query: &TimeframeQuery) -> Result<(String, String), ApiError> {
    let (Some(from), Some(to)) = (query.from.as_deref(), query.to.as_deref()) else {
        return Err(ApiError::bad_request("from and to parameters are required"));
    };

    let from_date = NaiveDate::parse_from_str(from, DATE_FORMAT)
        .map_err(|_| ApiError::bad_request("from date must be in YYYY-MM-DD format"))?;
    let to_date = NaiveDate::parse_from_str(to, DATE_FORMAT)
        .map_err(|_| ApiError::bad_request("to date must be in YYYY-MM-DD format"))?;

    if from_date > to_date {
        return Err(ApiError::bad_request("from date must be before or equal to to date"));
    }

    Ok((from.to_string(), to.to_string()))
}

pub(crate) fn content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub(crate) fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(from: Option<&str>, to: Option<&str>) -> TimeframeQuery {
        TimeframeQuery {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    #[test]
    fn accepts_a_valid_timeframe() {
        let (from, to) = parse_timeframe(&query(Some("2024-03-01"), Some("2024-03-07"))).unwrap();
        assert_eq!(from, "2024-03-01");
        assert_eq!(to, "2024-03-07");
    }

    #[test]
    fn accepts_a_single_day_timeframe() {
        assert!(parse_timeframe(&query(Some("2024-03-01"), Some("2024-03-01"))).is_ok());
    }

    #[test]
    fn rejects_missing_params() {
        assert!(parse_timeframe(&query(None, Some("2024-03-07"))).is_err());
        assert!(parse_timeframe(&query(Some("2024-03-01"), None)).is_err());
        assert!(parse_timeframe(&query(None, None)).is_err());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_timeframe(&query(Some("03/01/2024"), Some("2024-03-07"))).is_err());
        assert!(parse_timeframe(&query(Some("2024-03-01"), Some("not-a-date"))).is_err());
    }

    #[test]
    fn rejects_from_after_to() {
        let err = parse_timeframe(&query(Some("2024-03-10"), Some("2024-03-01"))).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}

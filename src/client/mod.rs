use axum::http::header;
use reqwest::{Client, Method, Response};
use thiserror::Error;

/// Transport-level failure of an outbound call. Anything the downstream
/// service answered, even a 5xx, is a `Response`, not an error.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to downstream service failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Fully determines one outbound call. Immutable once constructed and owned
/// exclusively by the call site that builds it.
#[derive(Debug)]
pub struct RequestParams {
    pub method: Method,
    pub url: String,
    pub body: Option<Vec<u8>>,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
}

/// Sends one request over the shared connection pool and returns the raw
/// response. No retries, no explicit timeout, no response buffering; callers
/// are responsible for consuming the body.
pub async fn send_request(client: &Client, params: RequestParams) -> Result<Response, ClientError> {
    let mut request = client.request(params.method, &params.url);

    if let Some(content_type) = params.content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }
    if let Some(authorization) = params.authorization {
        request = request.header(header::AUTHORIZATION, authorization);
    }
    if let Some(body) = params.body {
        request = request.body(body);
    }

    Ok(request.send().await?)
}

use reqwest::{Client, Method, Response};

use crate::client::{send_request, ClientError, RequestParams};

/// Client for the quote service.
#[derive(Clone)]
pub struct QuoteService {
    base_url: String,
    http: Client,
}

impl QuoteService {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub async fn today(&self) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::GET,
            url: format!("{}/quote/today", self.base_url),
            body: None,
            content_type: None,
            authorization: None,
        };
        send_request(&self.http, params).await
    }
}

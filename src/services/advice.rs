use reqwest::{Client, Method, Response};

use crate::client::{send_request, ClientError, RequestParams};
use crate::services::period_query;

const JSON: &str = "application/json";

/// Client for the advice service: cached period lookup, advice selection from
/// a mood summary, and the period-save endpoint used by the best-effort
/// persistence step.
#[derive(Clone)]
pub struct AdviceService {
    base_url: String,
    http: Client,
}

impl AdviceService {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub async fn get_by_period(&self, from: &str, to: &str, user_id: i64) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::GET,
            url: format!(
                "{}/advice/period/get?{}",
                self.base_url,
                period_query(from, to, user_id)
            ),
            body: None,
            content_type: None,
            authorization: None,
        };
        send_request(&self.http, params).await
    }

    pub async fn select(&self, body: Vec<u8>) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::POST,
            url: format!("{}/advice/select", self.base_url),
            body: Some(body),
            content_type: Some(JSON.to_string()),
            authorization: None,
        };
        send_request(&self.http, params).await
    }

    pub async fn save_period(&self, body: Vec<u8>) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::POST,
            url: format!("{}/advice/period/save", self.base_url),
            body: Some(body),
            content_type: Some(JSON.to_string()),
            authorization: None,
        };
        send_request(&self.http, params).await
    }
}

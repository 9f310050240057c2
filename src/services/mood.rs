use reqwest::{Client, Method, Response};

use crate::client::{send_request, ClientError, RequestParams};
use crate::services::period_query;

const JSON: &str = "application/json";

/// Client for the mood service, which owns mood entries and their summary
/// projection. Single-entry responses carry the recorded owner, which the
/// ownership-guarded handlers compare against the authenticated principal.
#[derive(Clone)]
pub struct MoodService {
    base_url: String,
    http: Client,
}

impl MoodService {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub async fn add(&self, body: Vec<u8>) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::POST,
            url: format!("{}/mood", self.base_url),
            body: Some(body),
            content_type: Some(JSON.to_string()),
            authorization: None,
        };
        send_request(&self.http, params).await
    }

    pub async fn get_types(&self) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::GET,
            url: format!("{}/mood/types", self.base_url),
            body: None,
            content_type: None,
            authorization: None,
        };
        send_request(&self.http, params).await
    }

    pub async fn get_summary(&self, from: &str, to: &str, user_id: i64) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::GET,
            url: format!("{}/mood/summary?{}", self.base_url, period_query(from, to, user_id)),
            body: None,
            content_type: None,
            authorization: None,
        };
        send_request(&self.http, params).await
    }

    pub async fn get_moods(&self, from: &str, to: &str, user_id: i64) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::GET,
            url: format!("{}/mood?{}", self.base_url, period_query(from, to, user_id)),
            body: None,
            content_type: None,
            authorization: None,
        };
        send_request(&self.http, params).await
    }

    pub async fn get_mood(&self, mood_id: i64) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::GET,
            url: format!("{}/mood/{}", self.base_url, mood_id),
            body: None,
            content_type: None,
            authorization: None,
        };
        send_request(&self.http, params).await
    }

    pub async fn update(&self, body: Vec<u8>) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::PUT,
            url: format!("{}/mood", self.base_url),
            body: Some(body),
            content_type: Some(JSON.to_string()),
            authorization: None,
        };
        send_request(&self.http, params).await
    }

    pub async fn delete_mood(&self, mood_id: i64) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::DELETE,
            url: format!("{}/mood/{}", self.base_url, mood_id),
            body: None,
            content_type: None,
            authorization: None,
        };
        send_request(&self.http, params).await
    }
}

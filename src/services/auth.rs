use reqwest::{Client, Method, Response};

use crate::client::{send_request, ClientError, RequestParams};

/// Client for the identity service. Token verification lives entirely on the
/// other side of this boundary; the gateway never inspects the credential.
#[derive(Clone)]
pub struct AuthService {
    base_url: String,
    http: Client,
}

impl AuthService {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Delegates credential verification: the inbound Authorization header is
    /// sent verbatim, and a 200 response carries the resolved user id.
    pub async fn authorize(&self, auth_header: &str) -> Result<Response, ClientError> {
        let params = RequestParams {
            method: Method::GET,
            url: format!("{}/auth/authorize", self.base_url),
            body: None,
            content_type: None,
            authorization: Some(auth_header.to_string()),
        };
        send_request(&self.http, params).await
    }

    pub async fn register(
        &self,
        content_type: Option<String>,
        body: Vec<u8>,
    ) -> Result<Response, ClientError> {
        self.passthrough("/auth/register", Method::POST, content_type, Some(body), None)
            .await
    }

    pub async fn login(
        &self,
        content_type: Option<String>,
        body: Vec<u8>,
    ) -> Result<Response, ClientError> {
        self.passthrough("/auth/login", Method::POST, content_type, Some(body), None)
            .await
    }

    /// Account operations on the logged user. The bearer header is forwarded
    /// so the identity service can resolve the subject itself.
    pub async fn user(
        &self,
        method: Method,
        content_type: Option<String>,
        body: Option<Vec<u8>>,
        authorization: Option<String>,
    ) -> Result<Response, ClientError> {
        self.passthrough("/auth/user", method, content_type, body, authorization)
            .await
    }

    async fn passthrough(
        &self,
        path: &str,
        method: Method,
        content_type: Option<String>,
        body: Option<Vec<u8>>,
        authorization: Option<String>,
    ) -> Result<Response, ClientError> {
        let params = RequestParams {
            method,
            url: format!("{}{}", self.base_url, path),
            body,
            content_type,
            authorization,
        };
        send_request(&self.http, params).await
    }
}

#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mood_gateway::config::GatewayConfig;
use mood_gateway::routes;
use mood_gateway::state::AppState;

/// One gateway instance bound to an ephemeral port, with all four downstream
/// services mocked.
pub struct TestGateway {
    pub base_url: String,
    pub auth: MockServer,
    pub mood: MockServer,
    pub advice: MockServer,
    pub quote: MockServer,
}

pub async fn spawn_gateway() -> Result<TestGateway> {
    let auth = MockServer::start().await;
    let mood = MockServer::start().await;
    let advice = MockServer::start().await;
    let quote = MockServer::start().await;

    let config = GatewayConfig {
        server_host: "127.0.0.1".to_string(),
        server_port: "0".to_string(),
        auth_url: auth.uri(),
        mood_url: mood.uri(),
        advice_url: advice.uri(),
        quote_url: quote.uri(),
    };

    let app = routes::app(AppState::new(&config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("gateway server");
    });

    Ok(TestGateway {
        base_url: format!("http://{}", addr),
        auth,
        mood,
        advice,
        quote,
    })
}

impl TestGateway {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Stubs the identity service to resolve any bearer token to `user_id`.
    pub async fn stub_authorize(&self, user_id: i64) {
        Mock::given(method("GET"))
            .and(path("/auth/authorize"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "userId": user_id })),
            )
            .mount(&self.auth)
            .await;
    }
}

/// Polls a mock server until it has seen a request for `wanted_path`, since
/// the best-effort persistence step runs on a task detached from the
/// response.
pub async fn wait_for_request(server: &MockServer, wanted_path: &str) -> bool {
    for _ in 0..40 {
        let requests = server.received_requests().await.unwrap_or_default();
        if requests.iter().any(|r| r.url.path() == wanted_path) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    false
}

/// Requests a mock server has seen for a given path.
pub async fn requests_for_path(server: &MockServer, wanted_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == wanted_path)
        .count()
}

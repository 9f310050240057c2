mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn protected_route_without_token_is_rejected_before_any_downstream_call() -> Result<()> {
    let gw = common::spawn_gateway().await?;
    let client = reqwest::Client::new();

    let res = client.get(gw.url("/auth/user")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body: Value = res.json().await?;
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["code"], json!("UNAUTHORIZED"));

    // The identity service never saw a request
    assert!(gw.auth.received_requests().await.unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn identity_rejection_collapses_to_unauthorized() -> Result<()> {
    // 401, 500 and 503 from the identity service are indistinguishable to
    // the caller: all become a gateway 401
    for status in [401u16, 500, 503] {
        let gw = common::spawn_gateway().await?;
        Mock::given(method("GET"))
            .and(path("/auth/authorize"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&gw.auth)
            .await;

        let res = reqwest::Client::new()
            .get(gw.url("/quote/today"))
            .header("Authorization", "Bearer bad-token")
            .send()
            .await?;

        assert_eq!(
            res.status(),
            StatusCode::UNAUTHORIZED,
            "identity status {} should collapse to 401",
            status
        );
        assert!(gw.quote.received_requests().await.unwrap().is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn authorize_response_without_user_id_is_rejected() -> Result<()> {
    let gw = common::spawn_gateway().await?;
    Mock::given(method("GET"))
        .and(path("/auth/authorize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&gw.auth)
        .await;

    let res = reqwest::Client::new()
        .get(gw.url("/quote/today"))
        .header("Authorization", "Bearer token")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn bearer_header_is_forwarded_verbatim_to_the_identity_service() -> Result<()> {
    let gw = common::spawn_gateway().await?;
    Mock::given(method("GET"))
        .and(path("/auth/authorize"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "userId": 7 })))
        .mount(&gw.auth)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "username": "demo",
            "email": "demo@example.com"
        })))
        .mount(&gw.auth)
        .await;

    let res = reqwest::Client::new()
        .get(gw.url("/auth/user"))
        .header("Authorization", "Bearer tok-123")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["username"], json!("demo"));
    Ok(())
}

#[tokio::test]
async fn register_is_forwarded_without_authentication() -> Result<()> {
    let gw = common::spawn_gateway().await?;
    let payload = json!({
        "username": "bob",
        "email": "bob@example.com",
        "password": "hunter2"
    });
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 3 })))
        .mount(&gw.auth)
        .await;

    let res = reqwest::Client::new()
        .post(gw.url("/auth/register"))
        .json(&payload)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?, json!({ "id": 3 }));
    Ok(())
}

#[tokio::test]
async fn failed_login_is_forwarded_with_the_upstream_status_and_body() -> Result<()> {
    let gw = common::spawn_gateway().await?;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid email or password"))
        .mount(&gw.auth)
        .await;

    let res = reqwest::Client::new()
        .post(gw.url("/auth/login"))
        .json(&json!({ "email": "bob@example.com", "password": "wrong" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.text().await?, "Invalid email or password");
    Ok(())
}

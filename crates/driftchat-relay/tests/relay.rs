//! Integration tests for the chat relay, with a wiremock upstream.

use driftchat_models::ErrorBody;
use driftchat_relay::api::{AppState, router};
use driftchat_relay::upstream::UpstreamClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_relay(upstream_url: &str) -> String {
    let state = AppState {
        upstream: UpstreamClient::new(upstream_url, "test-key"),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn missing_message_is_rejected_with_envelope() {
    let relay = spawn_relay("http://127.0.0.1:9").await;

    let response = reqwest::Client::new()
        .post(format!("{relay}/api/chat"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"error":"Missing message"}"#
    );
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let relay = spawn_relay("http://127.0.0.1:9").await;

    let response = reqwest::Client::new()
        .post(format!("{relay}/api/chat"))
        .json(&json!({ "message": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn forwards_message_and_relays_reply() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_json(json!({ "input": "Hello", "stream": true })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-provider", "mock")
                .set_body_raw("Hi there", "text/plain"),
        )
        .expect(1)
        .mount(&upstream)
        .await;

    let relay = spawn_relay(&upstream.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{relay}/api/chat"))
        .json(&json!({ "message": "Hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    // Upstream headers ride through verbatim.
    assert_eq!(response.headers()["x-provider"], "mock");
    assert_eq!(response.text().await.unwrap(), "Hi there");
}

#[tokio::test]
async fn relays_bytes_unaltered() {
    let payload = "stream with multibyte: \u{00e9}\u{4f60}\u{597d} \u{1f980}".as_bytes();

    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(payload.to_vec(), "text/plain"))
        .mount(&upstream)
        .await;

    let relay = spawn_relay(&upstream.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{relay}/api/chat"))
        .json(&json!({ "message": "anything" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.bytes().await.unwrap().as_ref(), payload);
}

#[tokio::test]
async fn propagates_upstream_status_and_body() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_raw(r#"{"error":"provider exploded"}"#, "application/json"),
        )
        .mount(&upstream)
        .await;

    let relay = spawn_relay(&upstream.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{relay}/api/chat"))
        .json(&json!({ "message": "Hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"error":"provider exploded"}"#
    );
}

#[tokio::test]
async fn unreachable_upstream_maps_to_500_envelope() {
    // Nothing listens here.
    let relay = spawn_relay("http://127.0.0.1:9").await;

    let response = reqwest::Client::new()
        .post(format!("{relay}/api/chat"))
        .json(&json!({ "message": "Hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: ErrorBody = response.json().await.unwrap();
    assert!(!body.error.is_empty());
}

#[tokio::test]
async fn health_reports_ok() {
    let relay = spawn_relay("http://127.0.0.1:9").await;

    let response = reqwest::Client::new()
        .get(format!("{relay}/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

//! Integration tests for the Reverie server.
//!
//! These tests start a real axum server on a random port, pointed at a
//! stubbed generator endpoint, and exercise the HTTP contract end to end.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};

use reverie_api::http::router::build_router;
use reverie_api::state::AppState;
use reverie_infra::config::ServiceConfig;

/// Spawn a stub generator answering `/responses` with a fixed status and
/// body, counting how many calls it receives.
async fn spawn_upstream(status: StatusCode, body: String) -> (String, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let app = Router::new().route(
        "/responses",
        post(move || {
            let body = body.clone();
            counter.fetch_add(1, Ordering::SeqCst);
            async move { (status, body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), calls)
}

/// Spawn the Reverie app on a random port against the given upstream.
async fn spawn_app(upstream_base: String, api_key: Option<&str>) -> String {
    let config = ServiceConfig {
        api_key: api_key.map(SecretString::from),
        model: "gpt-5".to_string(),
        base_url: upstream_base,
    };

    let router = build_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

fn reflection_payload(text: &str) -> String {
    json!({
        "output": [{"content": [{"type": "output_text", "text": text}]}]
    })
    .to_string()
}

#[tokio::test]
async fn submit_returns_normalized_reflection() {
    let (upstream, _calls) = spawn_upstream(
        StatusCode::OK,
        reflection_payload("1) ### What stands out\n- flying\n"),
    )
    .await;
    let base = spawn_app(upstream, Some("test-key-not-real")).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/dream"))
        .json(&json!({"dream": "I flew over a city", "context": {"mood": "curious"}}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let reflection = body["reflection"].as_str().unwrap();
    assert!(reflection.starts_with("### What stands out\n- flying\n"));
}

#[tokio::test]
async fn empty_body_is_rejected_before_upstream_call() {
    let (upstream, calls) =
        spawn_upstream(StatusCode::OK, reflection_payload("unused")).await;
    let base = spawn_app(upstream, Some("test-key-not-real")).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/dream"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"error": "Dream text is required (string)."}));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn bodyless_post_is_rejected_as_validation_error() {
    let (upstream, calls) =
        spawn_upstream(StatusCode::OK, reflection_payload("unused")).await;
    let base = spawn_app(upstream, Some("test-key-not-real")).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/dream"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Dream text is required (string).");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_credential_yields_configuration_error() {
    let (upstream, calls) =
        spawn_upstream(StatusCode::OK, reflection_payload("unused")).await;
    let base = spawn_app(upstream, None).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/dream"))
        .json(&json!({"dream": "I flew"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({"error": "Missing OPENAI_API_KEY in environment configuration."})
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_failure_surfaces_raw_body_as_details() {
    let (upstream, _calls) = spawn_upstream(
        StatusCode::TOO_MANY_REQUESTS,
        "rate limit exceeded".to_string(),
    )
    .await;
    let base = spawn_app(upstream, Some("test-key-not-real")).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/dream"))
        .json(&json!({"dream": "I flew"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "OpenAI API error");
    assert_eq!(body["details"], "rate limit exceeded");
}

#[tokio::test]
async fn malformed_upstream_success_reports_structured_error() {
    let (upstream, _calls) =
        spawn_upstream(StatusCode::OK, "<html>not json</html>".to_string()).await;
    let base = spawn_app(upstream, Some("test-key-not-real")).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/dream"))
        .json(&json!({"dream": "I flew"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "OpenAI API error");
    assert!(body["details"].as_str().unwrap().starts_with("malformed response:"));
}

#[tokio::test]
async fn probe_methods_return_liveness_payload() {
    let (upstream, _calls) =
        spawn_upstream(StatusCode::OK, reflection_payload("unused")).await;
    let base = spawn_app(upstream, Some("test-key-not-real")).await;

    for url in [format!("{base}/health"), format!("{base}/api/dream")] {
        let resp = reqwest::get(url).await.unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "ok");
    }
}

#[tokio::test]
async fn unsupported_method_is_rejected_with_json() {
    let (upstream, _calls) =
        spawn_upstream(StatusCode::OK, reflection_payload("unused")).await;
    let base = spawn_app(upstream, Some("test-key-not-real")).await;

    let resp = reqwest::Client::new()
        .put(format!("{base}/api/dream"))
        .json(&json!({"dream": "I flew"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 405);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Method not allowed");
}

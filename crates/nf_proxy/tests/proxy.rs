//! Integration tests for the proxy endpoint.
//!
//! These tests spin up a scripted fake upstream and a real proxy server on
//! loopback, then drive the proxy with a plain HTTP client.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use nf_proxy::{create_app, AppState, ProxyConfig};

#[derive(Clone)]
struct FakeUpstream {
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    reply: Arc<Mutex<(u16, String)>>,
}

impl FakeUpstream {
    fn new(status: u16, body: &str) -> Self {
        Self {
            queries: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new((status, body.to_string()))),
        }
    }

    fn last_query(&self) -> HashMap<String, String> {
        self.queries.lock().unwrap().last().cloned().expect("no upstream request seen")
    }
}

async fn upstream_handler(
    State(fake): State<FakeUpstream>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fake.queries.lock().unwrap().push(params);
    let (status, body) = fake.reply.lock().unwrap().clone();
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Start the fake upstream and a proxy pointed at it. Returns the upstream
/// script handle and the proxy's base URL.
async fn start_stack(status: u16, body: &str) -> (FakeUpstream, String) {
    let fake = FakeUpstream::new(status, body);
    let upstream_app = Router::new()
        .route("/v2/top-headlines", get(upstream_handler))
        .with_state(fake.clone());
    let upstream_addr = serve(upstream_app).await;

    let config = ProxyConfig::new(
        "test-key".to_string(),
        &format!("http://{}/v2/top-headlines", upstream_addr),
    )
    .unwrap();
    let proxy_addr = serve(create_app(AppState::new(config))).await;

    (fake, format!("http://{}/api/news", proxy_addr))
}

fn ok_payload() -> Value {
    json!({
        "status": "ok",
        "totalResults": 1,
        "articles": [{
            "title": "A",
            "description": "d",
            "source": {"name": "S"},
            "url": "http://x",
            "urlToImage": null,
            "publishedAt": "2024-01-01T00:00:00Z"
        }]
    })
}

#[tokio::test]
async fn test_success_relays_body_and_status() {
    let payload = ok_payload();
    let (_fake, proxy) = start_stack(200, &payload.to_string()).await;

    let response = reqwest::get(format!("{}?category=technology", proxy))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_forwards_fixed_parameters_and_credential() {
    let (fake, proxy) = start_stack(200, &ok_payload().to_string()).await;

    reqwest::get(format!("{}?category=technology", proxy))
        .await
        .unwrap();

    let query = fake.last_query();
    assert_eq!(query.get("category").map(String::as_str), Some("technology"));
    assert_eq!(query.get("country").map(String::as_str), Some("us"));
    assert_eq!(query.get("pageSize").map(String::as_str), Some("20"));
    assert_eq!(query.get("apiKey").map(String::as_str), Some("test-key"));
}

#[tokio::test]
async fn test_missing_category_defaults_to_general() {
    let (fake, proxy) = start_stack(200, &ok_payload().to_string()).await;

    reqwest::get(&proxy).await.unwrap();

    let query = fake.last_query();
    assert_eq!(query.get("category").map(String::as_str), Some("general"));
}

#[tokio::test]
async fn test_upstream_rejection_relays_status_and_message() {
    let body = json!({"status": "error", "message": "Your API key is invalid"});
    let (_fake, proxy) = start_stack(401, &body.to_string()).await;

    let response = reqwest::get(&proxy).await.unwrap();
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Your API key is invalid"}));
}

#[tokio::test]
async fn test_upstream_rejection_without_message_uses_fallback() {
    let (_fake, proxy) = start_stack(503, "{}").await;

    let response = reqwest::get(&proxy).await.unwrap();
    assert_eq!(response.status().as_u16(), 503);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to fetch news"}));
}

#[tokio::test]
async fn test_unparseable_upstream_body_is_internal_error() {
    let (_fake, proxy) = start_stack(200, "this is not json").await;

    let response = reqwest::get(&proxy).await.unwrap();
    assert_eq!(response.status().as_u16(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal_error() {
    // Grab a port and release it so the upstream address refuses connections.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ProxyConfig::new(
        "test-key".to_string(),
        &format!("http://{}/v2/top-headlines", dead_addr),
    )
    .unwrap();
    let proxy_addr = serve(create_app(AppState::new(config))).await;

    let response = reqwest::get(format!("http://{}/api/news", proxy_addr))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_credential_never_appears_in_error_body() {
    let (_fake, proxy) = start_stack(500, "{}").await;

    let response = reqwest::get(&proxy).await.unwrap();
    let text = response.text().await.unwrap();
    assert!(!text.contains("test-key"));
}

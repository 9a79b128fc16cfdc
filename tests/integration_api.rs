//! API integration tests
//!
//! Tests for HTTP API endpoints using axum's test utilities.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{default_user_json, TestHarness};
use http_body_util::BodyExt;
use profilecard::config::Config;
use profilecard::facts::{FactError, FactProvider};
use profilecard::server::{create_router, AppContext};
use tower::ServiceExt;
use wiremock::ResponseTemplate;

/// Helper to get response body as string
async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Provider that never touches the network
struct FixedFact(&'static str);

#[async_trait]
impl FactProvider for FixedFact {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_fact(&self) -> Result<Option<String>, FactError> {
        Ok(Some(self.0.to_string()))
    }
}

fn fixed_context(config: Config) -> AppContext {
    AppContext::with_provider(config, Arc::new(FixedFact("Cats have 32 muscles in each ear.")))
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router(fixed_context(Config::default()));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_api_health_endpoint() {
    let app = create_router(fixed_context(Config::default()));

    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_profile_endpoint() {
    let app = create_router(fixed_context(Config::default()));

    let response = app
        .oneshot(Request::get("/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = body_to_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["user"], default_user_json());
    assert_eq!(json["fact"], "Cats have 32 muscles in each ear.");
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));

    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["fact", "status", "timestamp", "user"]);
}

#[tokio::test]
async fn test_profile_ignores_query_parameters() {
    let app = create_router(fixed_context(Config::default()));

    let response = app
        .oneshot(
            Request::get("/me?name=someone-else&x=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["user"], default_user_json());
}

#[tokio::test]
async fn test_profile_rejects_post() {
    let app = create_router(fixed_context(Config::default()));

    let response = app
        .oneshot(Request::post("/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_custom_profile_route_and_profile() {
    let mut config = Config::default();
    config.server.route = "/profile".to_string();
    config.profile.name = "Ada Lovelace".to_string();
    config.profile.stack = "Rust/Axum".to_string();

    let app = create_router(fixed_context(config));

    let response = app
        .clone()
        .oneshot(Request::get("/profile").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["user"]["name"], "Ada Lovelace");
    assert_eq!(json["user"]["email"], "iremideadeyanju9@gmail.com");
    assert_eq!(json["user"]["stack"], "Rust/Axum");

    let response = app
        .oneshot(Request::get("/me").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document() {
    let mut config = Config::default();
    config.server.route = "/card".to_string();
    let app = create_router(fixed_context(config));

    let response = app
        .oneshot(Request::get("/api/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["info"]["title"], "Profilecard API");
    assert!(json["paths"]["/card"]["get"].is_object());
    assert!(json["paths"]["/api/health"]["get"].is_object());
    assert!(json["components"]["schemas"]["ResponseEnvelope"].is_object());
}

#[tokio::test]
async fn test_cors_preflight_allows_get() {
    let app = create_router(fixed_context(Config::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/me")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_profile_through_mock_upstream() {
    let h = TestHarness::new().await;
    h.upstream_responds(ResponseTemplate::new(503)).await;

    let response = h
        .router()
        .oneshot(Request::get("/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["fact"], profilecard_common::NETWORK_ERROR_FACT);
}

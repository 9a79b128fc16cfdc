//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which starts a [`MockServer`] standing in for the
//! fact provider, wires a [`CatFactProvider`] to it and builds the full
//! [`AppContext`]. The `with_server` constructors start Axum on a random port
//! for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use profilecard::config::Config;
use profilecard::facts::CatFactProvider;
use profilecard::server::{create_router, AppContext};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FACT_PATH: &str = "/fact";

/// Test harness wrapping a mock fact provider and an [`AppContext`] that
/// points at it.
pub struct TestHarness {
    pub ctx: AppContext,
    pub upstream: MockServer,
}

impl TestHarness {
    /// Create a new harness with default configuration and a 5 second
    /// provider timeout.
    pub async fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5)).await
    }

    /// Create a new harness whose provider gives up after `timeout`.
    pub async fn with_timeout(timeout: Duration) -> Self {
        Self::with_config_and_timeout(Config::default(), timeout).await
    }

    /// Create a new harness with a custom configuration. The fact provider
    /// url is always redirected to the mock upstream.
    pub async fn with_config(config: Config) -> Self {
        let timeout = config.facts.timeout();
        Self::with_config_and_timeout(config, timeout).await
    }

    async fn with_config_and_timeout(mut config: Config, timeout: Duration) -> Self {
        let upstream = MockServer::start().await;
        config.facts.url = format!("{}{FACT_PATH}", upstream.uri());

        let provider = Arc::new(CatFactProvider::new(config.facts.url.clone(), timeout));
        let ctx = AppContext::with_provider(config, provider);

        Self { ctx, upstream }
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx.clone())
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new().await;
        let addr = harness.serve().await;
        (harness, addr)
    }

    /// Start an Axum server whose provider gives up after `timeout`.
    pub async fn with_server_timeout(timeout: Duration) -> (Self, SocketAddr) {
        let harness = Self::with_timeout(timeout).await;
        let addr = harness.serve().await;
        (harness, addr)
    }

    async fn serve(&self) -> SocketAddr {
        let app = self.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        addr
    }

    /// Answer every fact request with `response`.
    pub async fn upstream_responds(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(FACT_PATH))
            .respond_with(response)
            .mount(&self.upstream)
            .await;
    }

    /// Answer every fact request with `{"fact": fact}`.
    pub async fn upstream_fact(&self, fact: &str) {
        self.upstream_responds(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "fact": fact, "length": fact.len() })),
        )
        .await;
    }
}

/// Matches `YYYY-MM-DDTHH:MM:SS(.ffffff)?Z`.
pub fn timestamp_pattern() -> regex::Regex {
    regex::Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{6})?Z$").unwrap()
}

/// The default profile as it appears in a response body.
pub fn default_user_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Iremide Joseph Adeyanju",
        "email": "iremideadeyanju9@gmail.com",
        "stack": "Python/Django"
    })
}

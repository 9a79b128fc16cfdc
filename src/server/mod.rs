use crate::config::{Config, ServerConfig};
use crate::facts::{CatFactProvider, FactProvider};
use anyhow::{Context, Result};
use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use profilecard_common::ProfileRecord;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod openapi;
pub mod routes_api;
pub mod routes_profile;

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    /// Card owner, frozen at startup
    pub profile: Arc<ProfileRecord>,
    /// Source of the fact attached to each profile response
    pub facts: Arc<dyn FactProvider>,
}

impl AppContext {
    /// Context backed by the configured catfact provider
    pub fn new(config: Config) -> Self {
        let facts = Arc::new(CatFactProvider::from_config(&config.facts));
        Self::with_provider(config, facts)
    }

    pub fn with_provider(config: Config, facts: Arc<dyn FactProvider>) -> Self {
        Self {
            profile: Arc::new(config.profile.to_record()),
            config: Arc::new(config),
            facts,
        }
    }
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let profile_route = ctx.config.server.route.clone();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Profile card
        .route(&profile_route, get(routes_profile::get_profile))
        // API routes and OpenAPI documentation
        .nest(
            "/api",
            routes_api::api_routes().merge(openapi::openapi_routes()),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Bind the listener for `host:port`; `host` may be an IP or a hostname
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))
}

/// Start the HTTP server
pub async fn start_server(config: Config) -> Result<()> {
    tracing::info!(
        "Fact provider: {} (timeout {}s)",
        config.facts.url,
        config.facts.timeout_secs
    );

    let listener = bind_listener(&config.server).await?;
    let app = create_router(AppContext::new(config));

    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

use crate::server::AppContext;
use axum::{response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

pub fn api_routes() -> Router<AppContext> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Service health and version.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

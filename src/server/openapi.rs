//! OpenAPI documentation.
//!
//! The document is served as JSON at `/api/openapi.json`. The profile path is
//! rewritten to the configured route before serving.

use axum::{extract::State, routing::get, Json, Router};
use utoipa::OpenApi;

use super::AppContext;

/// Route the profile handler is documented under.
const DOCUMENTED_PROFILE_ROUTE: &str = "/me";

/// OpenAPI documentation for Profilecard.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Profilecard API",
        version = "0.1.0",
        description = "Profile endpoint enriched with a fact from an external provider",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    servers(
        (url = "/", description = "Default server")
    ),
    paths(
        super::routes_profile::get_profile,
        super::routes_api::health,
    ),
    components(
        schemas(
            EnvelopeSchema,
            ProfileSchema,
            super::routes_api::HealthResponse,
        )
    ),
    tags(
        (name = "profile", description = "Profile card"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

// Schema wrappers for types from profilecard-common, which does not depend on utoipa

/// Profile card response.
#[derive(utoipa::ToSchema)]
#[schema(as = ResponseEnvelope)]
#[allow(dead_code)]
pub struct EnvelopeSchema {
    /// Always `success`
    #[schema(example = "success")]
    pub status: String,
    pub user: ProfileSchema,
    /// ISO-8601 UTC instant with a `Z` designator
    #[schema(example = "2024-01-01T12:00:00.000000Z")]
    pub timestamp: String,
    /// Fetched fact or a fallback text
    #[schema(example = "Cats sleep 70% of their lives.")]
    pub fact: String,
}

/// Card owner.
#[derive(utoipa::ToSchema)]
#[schema(as = ProfileRecord)]
#[allow(dead_code)]
pub struct ProfileSchema {
    pub name: String,
    pub email: String,
    pub stack: String,
}

/// Build the document with the profile path set to `route`.
pub fn api_doc(route: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if route != DOCUMENTED_PROFILE_ROUTE {
        if let Some(item) = doc.paths.paths.remove(DOCUMENTED_PROFILE_ROUTE) {
            doc.paths.paths.insert(route.to_string(), item);
        }
    }
    doc
}

pub fn openapi_routes() -> Router<AppContext> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json(State(ctx): State<AppContext>) -> Json<utoipa::openapi::OpenApi> {
    Json(api_doc(&ctx.config.server.route))
}

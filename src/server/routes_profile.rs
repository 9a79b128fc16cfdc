use crate::profile::build_envelope;
use crate::server::AppContext;
use axum::{extract::State, http::StatusCode, Json};
use profilecard_common::ResponseEnvelope;

/// Profile card enriched with a fact.
///
/// Always answers 200; an unavailable fact provider only changes the `fact`
/// text.
#[utoipa::path(
    get,
    path = "/me",
    tag = "profile",
    responses(
        (status = 200, description = "Profile card", body = super::openapi::EnvelopeSchema)
    )
)]
pub async fn get_profile(State(ctx): State<AppContext>) -> (StatusCode, Json<ResponseEnvelope>) {
    let envelope = build_envelope(&ctx.profile, ctx.facts.as_ref()).await;
    tracing::debug!(fact = %envelope.fact, "Serving profile");
    (StatusCode::OK, Json(envelope))
}

//! Envelope assembly for the profile endpoint.

use profilecard_common::time::now_timestamp;
use profilecard_common::{ProfileRecord, ResponseEnvelope};

use crate::facts::{resolve_fact, FactProvider};

/// Build one response envelope.
///
/// The fact is fetched first and the timestamp taken afterwards, so it
/// reflects when the envelope was assembled rather than when the request
/// arrived. Provider failures degrade the `fact` text only.
pub async fn build_envelope(profile: &ProfileRecord, facts: &dyn FactProvider) -> ResponseEnvelope {
    let fact = resolve_fact(facts).await.into_text();
    ResponseEnvelope::success(profile.clone(), fact, now_timestamp())
}

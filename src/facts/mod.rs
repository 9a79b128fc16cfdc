//! Fact providers for enriching the profile card.
//!
//! - [`provider`] -- Trait definition and error type.
//! - [`catfact`] -- catfact.ninja implementation.
//!
//! [`resolve_fact`] is the only entry point the server uses: it turns any
//! provider failure into a [`FactOutcome`] so the caller always has text to
//! show.

pub mod catfact;
pub mod provider;

pub use catfact::CatFactProvider;
pub use provider::{FactError, FactProvider};

use profilecard_common::FactOutcome;
use tracing::warn;

/// Ask `provider` for one fact, absorbing every failure.
///
/// Failures are reported through a `warn!` event and never returned.
pub async fn resolve_fact(provider: &dyn FactProvider) -> FactOutcome {
    match provider.fetch_fact().await {
        Ok(fact) => {
            let outcome = FactOutcome::from_field(fact);
            if outcome == FactOutcome::Missing {
                warn!(provider = provider.name(), "Fact provider response had no fact");
            }
            outcome
        }
        Err(e) => {
            warn!(
                provider = provider.name(),
                timeout = e.is_timeout(),
                error = %e,
                "Error fetching fact"
            );
            FactOutcome::Unreachable
        }
    }
}

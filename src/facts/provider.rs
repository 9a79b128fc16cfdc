//! Trait definition and error type for fact providers.
//!
//! A fact provider wraps one external HTTP service that answers with a short
//! piece of trivia. The profile endpoint asks it for a single fact per
//! request and never lets its failures escape.

use async_trait::async_trait;

/// Why a fact could not be obtained from a provider.
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("fact request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("fact provider returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The provider answered with a body that is not the expected JSON object.
    #[error("fact provider returned a malformed body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FactError {
    /// Whether the request never completed because it ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}

/// Async trait implemented by every fact source.
///
/// Providers are shared across requests behind an `Arc`, so they must be
/// `Send + Sync`.
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"catfact"`).
    fn name(&self) -> &'static str;

    /// Fetch one fact.
    ///
    /// `Ok(None)` means the provider answered successfully but the body did
    /// not carry a fact.
    async fn fetch_fact(&self) -> Result<Option<String>, FactError>;
}

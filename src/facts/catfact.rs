//! catfact.ninja fact provider.
//!
//! Issues a single `GET` per call, bounded by the configured timeout. No
//! retries and no caching: every profile request sees a fresh fact or a
//! fallback.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::FactsConfig;
use crate::facts::provider::{FactError, FactProvider};

#[derive(Debug, Deserialize)]
struct CatFactResponse {
    fact: Option<String>,
}

pub struct CatFactProvider {
    client: Client,
    url: String,
    timeout: Duration,
}

impl CatFactProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &FactsConfig) -> Self {
        Self::new(config.url.clone(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FactProvider for CatFactProvider {
    fn name(&self) -> &'static str {
        "catfact"
    }

    async fn fetch_fact(&self) -> Result<Option<String>, FactError> {
        debug!(url = %self.url, "Fetching fact");

        // The client may be a fallback built without a timeout.
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: CatFactResponse = serde_json::from_slice(&body)?;

        Ok(parsed.fact)
    }
}

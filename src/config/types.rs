use profilecard_common::ProfileRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub facts: FactsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Path the profile endpoint is mounted on
    #[serde(default = "default_route")]
    pub route: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_route() -> String {
    "/me".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            route: default_route(),
        }
    }
}

/// Card owner details. Any field left out of the file keeps its built-in value.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_stack")]
    pub stack: String,
}

fn default_name() -> String {
    profilecard_common::DEFAULT_NAME.to_string()
}
fn default_email() -> String {
    profilecard_common::DEFAULT_EMAIL.to_string()
}
fn default_stack() -> String {
    profilecard_common::DEFAULT_STACK.to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
            stack: default_stack(),
        }
    }
}

impl ProfileConfig {
    pub fn to_record(&self) -> ProfileRecord {
        ProfileRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            stack: self.stack.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FactsConfig {
    /// Endpoint answering `GET` with `{"fact": "..."}`
    #[serde(default = "default_facts_url")]
    pub url: String,

    /// Upper bound on the whole outbound request (default: 5)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_facts_url() -> String {
    "https://catfact.ninja/fact".to_string()
}
fn default_timeout_secs() -> u64 {
    5
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            url: default_facts_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FactsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to load config file: {:?}", path))?;

    Ok(config)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Failed to parse config")?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./profilecard.toml",
        "~/.config/profilecard/config.toml",
        "/etc/profilecard/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    // Validate server config
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    let route = &config.server.route;
    if !route.starts_with('/') {
        anyhow::bail!("Profile route must start with '/': {}", route);
    }
    if route == "/" || route == "/health" || route == "/api" || route.starts_with("/api/") {
        anyhow::bail!("Profile route '{}' collides with a built-in route", route);
    }
    // Path parameters and wildcards are not literal routes
    if route.contains([':', '*', '{', '}']) {
        anyhow::bail!("Profile route must be a literal path: {}", route);
    }

    // Validate profile
    config
        .profile
        .to_record()
        .validate()
        .context("Invalid [profile] section")?;

    // Validate fact provider
    let url = &config.facts.url;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("Fact provider url must be http(s): {}", url);
    }
    if config.facts.timeout_secs == 0 {
        anyhow::bail!("Fact provider timeout cannot be 0");
    }

    Ok(())
}

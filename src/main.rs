mod cli;

use profilecard::{
    config,
    facts::CatFactProvider,
    profile::build_envelope,
    server,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    // Load config
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config::validate_config(&config)?;

    tracing::info!("Starting Profilecard server");
    tracing::info!(
        "Server will listen on {}:{}, profile at {}",
        config.server.host,
        config.server.port,
        config.server.route
    );

    let result = server::start_server(config).await;

    tracing::info!("Shutting down...");
    result
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "profilecard=trace,profilecard_common=debug,tower_http=debug".to_string()
        } else {
            "profilecard=debug,profilecard_common=debug,tower_http=info".to_string()
        }
    });

    // Logs go to stderr so `profile` output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            // Create tokio runtime
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Profile { compact } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(print_profile(cli.config.as_deref(), compact))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("profilecard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn print_profile(config_path: Option<&std::path::Path>, compact: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let provider = CatFactProvider::from_config(&config.facts);

    let envelope = build_envelope(&config.profile.to_record(), &provider).await;

    let json_str = if compact {
        serde_json::to_string(&envelope)?
    } else {
        serde_json::to_string_pretty(&envelope)?
    };
    println!("{}", json_str);

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_summary(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            print_summary(&config);
        }
    }

    Ok(())
}

fn print_summary(config: &config::Config) {
    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!("  Profile route: {}", config.server.route);
    println!(
        "  Profile: {} <{}> ({})",
        config.profile.name, config.profile.email, config.profile.stack
    );
    println!(
        "  Fact provider: {} (timeout {}s)",
        config.facts.url, config.facts.timeout_secs
    );
}

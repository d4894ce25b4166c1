use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedpeek_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "feedpeek")]
#[command(author, version, about = "Fetch an RSS feed and list its items")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a feed over HTTP and print its items
    Fetch {
        /// Feed URL (defaults to the configured feed)
        url: Option<String>,
    },
    /// Parse a local XML feed file and print its items
    Parse {
        /// Path to the feed document
        file: PathBuf,
    },
}

/// Log filter directive: RUST_LOG wins, configured log level is the fallback
fn log_filter(env_directive: Option<String>, config: &AppConfig) -> String {
    env_directive.unwrap_or_else(|| config.general.log_level.clone())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter(
            std::env::var("RUST_LOG").ok(),
            &config,
        )))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Fetch { url }) => commands::fetch::run(&config, url.as_deref()).await,
        Some(Commands::Parse { file }) => commands::parse::run(&file),
        // No subcommand fetches the configured feed
        None => commands::fetch::run(&config, None).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_prefers_rust_log() {
        let config = AppConfig::default();
        assert_eq!(
            log_filter(Some("debug".to_string()), &config),
            "debug"
        );
    }

    #[test]
    fn test_log_filter_falls_back_to_configured_level() {
        let mut config = AppConfig::default();
        config.general.log_level = "warn".to_string();
        assert_eq!(log_filter(None, &config), "warn");
    }
}

//! Activity Store binary entry point.
//!
//! Opens the database (running migrations) and prints every activity as a
//! JSON array on stdout. All logs go to stderr.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use activity_store::config::Config;
use activity_store::error::AppError;
use activity_store::storage::SqliteStorage;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Load configuration first so LOG_LEVEL from .env applies
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map_or("info", |config| config.log_level.as_str())
        .to_string();

    // Initialize logging to stderr only (stdout is for the JSON output)
    tracing_subscriber::fmt()
        .with_env_filter(
            log_level
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: database={}, max_connections={}",
        config.database_path,
        config.max_connections
    );

    if let Err(e) = run(&config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(config: &Config) -> Result<(), AppError> {
    let storage = SqliteStorage::from_config(config).await?;
    let activities = storage.get_all_activities().await?;

    tracing::info!(count = activities.len(), "activities loaded");

    let json = serde_json::to_string_pretty(&activities)?;
    println!("{json}");

    Ok(())
}

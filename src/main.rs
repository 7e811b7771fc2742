// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use autoptr::{config::Config, sync, technitium::TechnitiumClient};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("autoptr")
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    // Initialize logging with custom format
    // Format: timestamp file:line LEVEL message
    //
    // Respects RUST_LOG environment variable if set, otherwise defaults to INFO level
    // Example: RUST_LOG=debug cargo run
    //
    // Respects RUST_LOG_FORMAT environment variable for output format
    // Example: RUST_LOG_FORMAT=json cargo run
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    info!("Starting Technitium Auto-PTR Generator");

    let config = Config::from_constants();
    config.validate()?;

    if config.dry_run {
        info!("DRY RUN MODE - no changes will be made");
    }

    info!(api_url = %config.api_url, "Connecting to Technitium");
    let client = TechnitiumClient::new(&config.api_url, &config.api_token)?;

    // A single sequential run; Ctrl-C terminates with a non-zero exit status.
    tokio::select! {
        result = sync::run(&client, &config) => {
            result?;
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted by user");
            anyhow::bail!("interrupted by user")
        }
    }
}

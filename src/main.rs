//! Ticker Presence Bot - Entry Point
//!
//! This binary:
//! 1. Loads configuration from the environment
//! 2. Connects to the identity gateway and waits for readiness
//! 3. Starts the two update tasks (display name, status line)
//! 4. Runs until Ctrl+C, then shuts both tasks down cleanly

use std::sync::Arc;

use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

use ticker_bot::adapters::{create_source, QuoteSource};
use ticker_bot::config;
use ticker_bot::config::constants;
use ticker_bot::core::{IdentityUpdater, NameUpdateCycle, Scheduler, StatusUpdateCycle};
use ticker_bot::gateway::{ChatGateway, IdentityGateway};
use ticker_bot::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();

    // Initialize logging
    config::init_logging();

    info!("Ticker presence bot starting...");

    // A startup failure (missing credential, unreachable gateway) is fatal;
    // everything after readiness is cycle-scoped and never exits.
    if let Err(e) = run().await {
        error!("Fatal startup error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run() -> Result<(), AppError> {
    // Load configuration from environment
    let app_config = config::load_config()?;
    info!(
        source = app_config.quote_source.as_str(),
        pair = %app_config.trading_pair,
        "Configuration loaded"
    );
    constants::log_configuration();

    // Build the quote source adapter
    let source = Arc::new(create_source(&app_config));
    info!(
        source = source.source_name(),
        display_symbol = source.display_symbol(),
        "Quote source ready"
    );

    // Connect to the identity gateway
    let gateway = Arc::new(ChatGateway::new(app_config.gateway.clone())?);
    gateway.connect().await?;

    // Both tasks are gated on the ready event, fired once per session
    gateway.wait_until_ready().await;
    info!("Gateway ready, starting update tasks");

    // Create shutdown broadcast channel
    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    // Register the two cycles with their cadences
    let mut scheduler = Scheduler::new(shutdown_tx.clone());
    scheduler.register(
        "name_update",
        constants::name_update_interval(),
        Arc::new(NameUpdateCycle::new(
            Arc::clone(&source),
            Arc::clone(&gateway),
            IdentityUpdater::new(Arc::clone(&gateway), constants::status_settle_delay()),
        )),
    );
    scheduler.register(
        "status_update",
        constants::status_update_interval(),
        Arc::new(StatusUpdateCycle::new(
            Arc::clone(&source),
            IdentityUpdater::new(Arc::clone(&gateway), constants::status_settle_delay()),
        )),
    );

    let handles = scheduler.spawn_all();

    // Run until Ctrl+C
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Graceful shutdown initiated");
        }
        Err(e) => {
            error!("Failed to listen for Ctrl+C signal: {}", e);
        }
    }

    // Broadcast shutdown and wait for both loops to stop
    let _ = shutdown_tx.send(());
    for handle in handles {
        let _ = handle.await;
    }

    gateway.disconnect().await;

    info!("Clean exit");
    Ok(())
}

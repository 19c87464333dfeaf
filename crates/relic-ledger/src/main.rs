//! Relic Ledger Server Binary
//!
//! Runs the relic ledger HTTP server over the configured ledger backend.

use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::FmtSubscriber;

use relic_ledger::{
    create_router, AppState, Dispatcher, LedgerConfig, LedgerGateway, MemoryLedger, OrderService,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match LedgerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_target(true)
        .with_thread_ids(true)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ExitCode::FAILURE;
    }

    let ledger = match open_ledger(&config).await {
        Ok(ledger) => ledger,
        Err(e) => {
            error!(error = %e, "Failed to open ledger");
            return ExitCode::FAILURE;
        }
    };

    info!(
        name = ?config.name,
        backend = ledger.backend_name(),
        port = config.port,
        "Starting relic ledger server"
    );

    let dispatcher = Dispatcher::new(OrderService::new(ledger));
    let addr = config.listen_addr();
    let state = Arc::new(AppState { dispatcher, config });
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %addr, error = %e, "Failed to bind to address");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %addr, "Relic ledger listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(feature = "postgres")]
async fn open_ledger(
    config: &LedgerConfig,
) -> Result<Arc<dyn LedgerGateway>, relic_ledger::LedgerError> {
    match &config.database_url {
        Some(url) => Ok(Arc::new(relic_ledger::PostgresLedger::new(url).await?)),
        None => {
            warn!("No database URL configured, using in-memory ledger");
            Ok(Arc::new(MemoryLedger::new()))
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn open_ledger(
    config: &LedgerConfig,
) -> Result<Arc<dyn LedgerGateway>, relic_ledger::LedgerError> {
    if config.database_url.is_some() {
        warn!("Database URL set but the postgres feature is disabled, using in-memory ledger");
    }
    Ok(Arc::new(MemoryLedger::new()))
}

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use route_server::config::ServerConfig;
use route_server::registry::india;
use route_server::snapshot::{ReferenceData, SnapshotStore};
use route_server::source::{RouteTable, SourceError, sample};
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Load route data (fail fast if the configured file is unusable)
    let table = match load_routes(&config) {
        Ok(table) => table,
        Err(e) => {
            error!(error = %e, "failed to load route data");
            return ExitCode::FAILURE;
        }
    };
    info!(
        pairs = table.pair_count(),
        routes = table.route_count(),
        "loaded route data"
    );

    let registry = india();
    info!(cities = registry.len(), "loaded city registry");

    let store = Arc::new(SnapshotStore::new(ReferenceData::cached(
        registry,
        table,
        &config.cache,
    )));

    // Spawn background task to reload the routes file
    if let Some(path) = config.routes_file.clone() {
        let store = Arc::clone(&store);
        let cache = config.cache.clone();
        let period = config.reload_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                let reload = Arc::clone(&store).reload(path.clone(), cache.clone());
                if let Err(e) = reload.await {
                    // The previous snapshot stays live
                    debug!(error = %e, "scheduled reload skipped");
                }
            }
        });
    }

    let state = AppState::new(store, config.planner.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.bind_addr, "route server listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    info!("route server stopped");
    ExitCode::SUCCESS
}

fn load_routes(config: &ServerConfig) -> Result<RouteTable, SourceError> {
    match &config.routes_file {
        Some(path) => RouteTable::load(path),
        None => {
            info!("no routes file configured, serving built-in sample data");
            sample()
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

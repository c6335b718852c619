use std::sync::Arc;
use tracing::{info, warn};

use crate::app::{app, AppState};
use crate::config;
use crate::database::{DataInitializer, MemoryStore, PgStore, Store};

pub async fn handle(port: Option<u16>, seed: bool) -> anyhow::Result<()> {
    let config = config::config().clone();
    info!("Starting Quarano API in {:?} mode", config.environment);

    let store: Arc<dyn Store> = match &config.database.url {
        Some(url) => {
            let store = PgStore::connect(url, &config.database).await?;
            store.migrate().await?;
            if seed {
                DataInitializer::new(&store).run().await?;
            }
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL not set, using the in-memory store with sample data");
            let store = MemoryStore::new();
            DataInitializer::new(&store).run().await?;
            Arc::new(store)
        }
    };

    let port = port.unwrap_or(config.server.port);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Quarano API listening on http://{}", bind_addr);

    axum::serve(listener, app(AppState::new(store, config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

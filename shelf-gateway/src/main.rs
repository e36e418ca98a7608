//! Entry point for the `shelf-gateway` HTTP server.

use std::sync::Arc;

use shelf_gateway::{
    config::{DatabaseTarget, GatewayConfig},
    routes::{create_router, Store},
};
use shelf_store::{MemoryStore, SqliteStore, StoreError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

async fn open_store(config: &GatewayConfig) -> Result<Store, StoreError> {
    match &config.database {
        DatabaseTarget::Memory => {
            warn!("using in-memory store; bookmarks will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        DatabaseTarget::Sqlite(url) => {
            let pool = shelf_store::connect(url, config.max_connections).await?;
            let store = SqliteStore::new(pool);
            store.migrate().await?;
            info!(database = %url, "sqlite store ready");
            Ok(Arc::new(store))
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store = match open_store(&config).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to open bookmark store");
            std::process::exit(1);
        }
    };

    let app = create_router(store);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "shelf-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

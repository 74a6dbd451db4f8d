//! biztime server binary
//!
//! ```sh
//! DATABASE_URL=postgres://localhost/biztime cargo run --features postgres
//! ```

use anyhow::Result;
use biztime::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("biztime=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load()?;
    let builder = with_configured_store(ServerBuilder::new(), &config).await?;

    builder.serve(&config.server.bind_addr).await
}

#[cfg(feature = "postgres")]
async fn with_configured_store(builder: ServerBuilder, config: &AppConfig) -> Result<ServerBuilder> {
    match &config.database.url {
        Some(url) => {
            let store = PostgresStore::connect(url, config.database.max_connections).await?;
            store.migrate().await?;
            tracing::info!("Using PostgreSQL store");
            Ok(builder.with_store(store))
        }
        None => {
            tracing::warn!("No database URL configured, using in-memory store");
            Ok(builder.with_store(InMemoryStore::new()))
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn with_configured_store(builder: ServerBuilder, config: &AppConfig) -> Result<ServerBuilder> {
    if config.database.url.is_some() {
        tracing::warn!("Built without the `postgres` feature, ignoring database URL");
    }
    tracing::warn!("Using in-memory store; data is lost on shutdown");
    Ok(builder.with_store(InMemoryStore::new()))
}

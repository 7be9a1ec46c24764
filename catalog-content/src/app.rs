//! Catalog application - wires store, cache, manager and HTTP API together.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::application_service::cached_content_service::CachedContentService;
use crate::application_service::content_manager::ContentManager;
use crate::config::{CatalogConfig, StoreBackend};
use crate::infrastructure::in_memory_store::InMemoryContentStore;
use crate::infrastructure::moka_cache::MokaContentCache;
use crate::infrastructure::persistence::SledContentStore;
use crate::port::content_store::ContentStore;
use crate::presentation::http_api::{create_router, AppState};

/// Catalog instance.
pub struct CatalogApp {
    config: CatalogConfig,
    store: Arc<dyn ContentStore>,
    service: AppState,
}

impl CatalogApp {
    /// Build the catalog with the store backend named in `config`.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let store = build_store(&config).context("Failed to initialize content store")?;
        let cache = Arc::new(MokaContentCache::new(config.cache.max_capacity));
        let service = Arc::new(CachedContentService::new(
            ContentManager::new(store.clone()),
            cache,
        ));

        Ok(Self {
            config,
            store,
            service,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn service(&self) -> &AppState {
        &self.service
    }

    pub fn router(&self) -> axum::Router {
        create_router(self.service.clone())
    }

    /// Flush pending store writes.
    pub async fn flush(&self) -> Result<()> {
        self.store.flush().await.context("Failed to flush content store")
    }

    /// Serve the HTTP API until ctrl-c.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.http_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.http_addr))?;

        tracing::info!("Catalog listening on http://{}", self.config.http_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        self.flush().await?;
        tracing::info!("Catalog stopped");
        Ok(())
    }
}

fn build_store(config: &CatalogConfig) -> Result<Arc<dyn ContentStore>> {
    let store_config = &config.store;
    match store_config.backend {
        StoreBackend::Memory => {
            let mut store = InMemoryContentStore::new().with_latency(store_config.latency());
            if store_config.seed_mock_data {
                store = store.with_seed_data();
            }
            tracing::info!(
                "Using in-memory store (latency {} ms, seeded: {})",
                store_config.latency_ms,
                store_config.seed_mock_data
            );
            Ok(Arc::new(store))
        }
        StoreBackend::Sled => {
            std::fs::create_dir_all(&store_config.data_dir)
                .context("Failed to create data directory")?;
            let store = SledContentStore::open(store_config.data_dir.join("contents"))
                .context("Failed to open sled database")?;
            if store_config.seed_mock_data {
                let seeded = store.seed_if_empty().context("Failed to seed sled store")?;
                if seeded > 0 {
                    tracing::info!("Seeded sled store with {} records", seeded);
                }
            }
            tracing::info!("Using sled store at {:?}", store_config.data_dir);
            Ok(Arc::new(store))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

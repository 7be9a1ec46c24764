//! Catalog server binary entry point.

use anyhow::{Context, Result};
use catalog_content::{CatalogApp, CatalogConfig, StoreBackend};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Catalog server CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "catalog-server")]
#[command(about = "Content catalog with a cache-aside store layer")]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP API listen address (overrides the config file).
    #[arg(short = 'l', long)]
    listen: Option<SocketAddr>,

    /// Store backend: memory or sled (overrides the config file).
    #[arg(short, long)]
    backend: Option<StoreBackend>,

    /// Data directory for the sled backend (overrides the config file).
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => CatalogConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => CatalogConfig::default(),
    };
    if let Some(listen) = args.listen {
        config.http_addr = listen;
    }
    if let Some(backend) = args.backend {
        config.store.backend = backend;
    }
    if let Some(data_dir) = args.data_dir {
        config.store.data_dir = data_dir;
    }

    tracing::info!("Starting catalog server");
    tracing::info!("Store backend: {:?}", config.store.backend);

    let app = CatalogApp::new(config).context("Failed to create catalog")?;
    app.run().await
}

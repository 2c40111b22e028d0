use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cart_service::adapters::http_catalog::HttpCatalog;
use cart_service::adapters::json_file_store::JsonFileStore;
use cart_service::application::cart_manager::CartManager;
use cart_service::shell::config::Config;
use cart_service::shell::http::app;
use cart_service::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let catalog = Arc::new(HttpCatalog::new(&config.catalog_base_url));
    let store = Arc::new(JsonFileStore::new(&config.data_dir));
    let cart = Arc::new(CartManager::hydrate(catalog, store).await);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!(addr = %config.addr, catalog = %config.catalog_base_url, "cart service listening");
    axum::serve(listener, app(AppState { cart })).await?;

    Ok(())
}

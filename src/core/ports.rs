// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the two external collaborators as traits: the catalog/stock
//   service and the persistent key-value store.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::cart::Product;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("product {0} not found")]
    NotFound(u64),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read-only view of the remote catalog. Stock is whatever the service
/// reports at call time; the core never writes through this port.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn product(&self, product_id: u64) -> Result<Product, CatalogError>;
    async fn stock(&self, product_id: u64) -> Result<u32, CatalogError>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Single-blob key-value persistence. The cart manager always writes the
/// whole snapshot under one fixed key, never a partial update.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn write(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}

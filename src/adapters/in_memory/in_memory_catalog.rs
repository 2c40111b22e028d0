// In memory implementation of the CatalogService port.
//
// Purpose
// - Support cart manager tests and local development without a catalog
//   backend.
//
// Responsibilities
// - Serve product metadata and stock counts from maps.
// - Simulate an unreachable catalog via an offline toggle.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::core::cart::Product;
use crate::core::ports::{CatalogError, CatalogService};

#[derive(Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<u64, Product>>,
    stock: RwLock<HashMap<u64, u32>>,
    offline: AtomicBool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(entries: impl IntoIterator<Item = (Product, u32)>) -> Self {
        let mut products = HashMap::new();
        let mut stock = HashMap::new();
        for (product, available) in entries {
            stock.insert(product.id, available);
            products.insert(product.id, product);
        }
        Self {
            products: RwLock::new(products),
            stock: RwLock::new(stock),
            offline: AtomicBool::new(false),
        }
    }

    pub async fn set_stock(&self, product_id: u64, amount: u32) {
        self.stock.write().await.insert(product_id, amount);
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), CatalogError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CatalogError::Unavailable("catalog offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogService for InMemoryCatalog {
    async fn product(&self, product_id: u64) -> Result<Product, CatalogError> {
        self.check_online()?;
        self.products
            .read()
            .await
            .get(&product_id)
            .cloned()
            .ok_or(CatalogError::NotFound(product_id))
    }

    async fn stock(&self, product_id: u64) -> Result<u32, CatalogError> {
        self.check_online()?;
        self.stock
            .read()
            .await
            .get(&product_id)
            .copied()
            .ok_or(CatalogError::NotFound(product_id))
    }
}

// HTTP implementation of the CatalogService port.
//
// Purpose
// - Talk to the remote product/stock API the storefront consumes:
//   GET {base}/products/{id} and GET {base}/stock/{id}.
//
// Responsibilities
// - Map 404 to NotFound, everything else that goes wrong (transport,
//   non-success status, malformed payload) to Unavailable.
//
// Boundaries
// - Read-only. No retries, no timeouts beyond the client defaults.

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::cart::Product;
use crate::core::ports::{CatalogError, CatalogService};

pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        product_id: u64,
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{path}/{product_id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| CatalogError::Unavailable(err.to_string()))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(product_id));
        }
        let response = response
            .error_for_status()
            .map_err(|err| CatalogError::Unavailable(err.to_string()))?;
        response
            .json::<T>()
            .await
            .map_err(|err| CatalogError::Unavailable(format!("malformed payload: {err}")))
    }
}

#[derive(Deserialize)]
struct StockRecord {
    amount: u32,
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn product(&self, product_id: u64) -> Result<Product, CatalogError> {
        self.get_json::<Product>("products", product_id).await
    }

    async fn stock(&self, product_id: u64) -> Result<u32, CatalogError> {
        let record = self.get_json::<StockRecord>("stock", product_id).await?;
        Ok(record.amount)
    }
}

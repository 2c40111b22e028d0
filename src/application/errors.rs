use thiserror::Error;

use crate::core::ports::{CatalogError, StoreError};

/// Every failure a cart operation can surface. All of these are user-facing
/// rejections; none of them leave the manager unusable.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("requested amount for product {product_id} is out of stock")]
    OutOfStock { product_id: u64 },

    #[error("product {product_id} not found")]
    ProductNotFound { product_id: u64 },

    #[error("product {product_id} is not in the cart")]
    ItemNotInCart { product_id: u64 },

    #[error("catalog unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("failed to persist cart: {0}")]
    Storage(#[from] StoreError),
}

impl CartError {
    pub(crate) fn from_catalog(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(product_id) => CartError::ProductNotFound { product_id },
            CatalogError::Unavailable(reason) => CartError::ServiceUnavailable(reason),
        }
    }
}

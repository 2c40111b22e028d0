use std::sync::Arc;

use crate::application::cart_manager::CartManager;
use crate::core::ports::{CartStore, CatalogService};

pub struct AppState<TCatalog, TStore>
where
    TCatalog: CatalogService + 'static,
    TStore: CartStore + 'static,
{
    pub cart: Arc<CartManager<TCatalog, TStore>>,
}

impl<TCatalog, TStore> Clone for AppState<TCatalog, TStore>
where
    TCatalog: CatalogService + 'static,
    TStore: CartStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            cart: Arc::clone(&self.cart),
        }
    }
}

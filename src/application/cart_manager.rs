// The cart manager orchestrates every cart mutation.
//
// Responsibilities
// - Own the in-memory cart exclusively; consumers only see snapshots.
// - Validate add/update against the stock reported by the catalog at call
//   time.
// - Mirror every successful mutation to the store as one full snapshot
//   before the operation completes (write-through).
//
// Concurrency
// - One tokio mutex guards the cart for the whole of each operation,
//   including the awaited catalog calls. Operations on one manager
//   serialize; there is no lost-update window between the stock check and
//   the write.
//
// Failure
// - Catalog failures reject the operation with the cart untouched.
// - A failed store write rolls the in-memory mutation back and surfaces
//   CartError::Storage, so memory and store never diverge.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use crate::application::errors::CartError;
use crate::core::cart::{Cart, CartItem};
use crate::core::ports::{CartStore, CatalogService, StoreError};

/// The fixed key the snapshot lives under in the store.
pub const CART_STORAGE_KEY: &str = "cart";

pub struct CartManager<TCatalog, TStore>
where
    TCatalog: CatalogService + 'static,
    TStore: CartStore + 'static,
{
    catalog: Arc<TCatalog>,
    store: Arc<TStore>,
    cart: Mutex<Cart>,
}

impl<TCatalog, TStore> CartManager<TCatalog, TStore>
where
    TCatalog: CatalogService + 'static,
    TStore: CartStore + 'static,
{
    /// Build the manager for this session, hydrating the cart from the store.
    /// Absent, unreadable, or structurally invalid snapshots fall back to an
    /// empty cart; hydration never fails.
    pub async fn hydrate(catalog: Arc<TCatalog>, store: Arc<TStore>) -> Self {
        let cart = match store.read(CART_STORAGE_KEY).await {
            Ok(Some(blob)) => match serde_json::from_str::<Cart>(&blob) {
                Ok(cart) if cart.is_structurally_valid() => cart,
                Ok(_) => {
                    warn!("discarding persisted cart: structural invariants violated");
                    Cart::new()
                }
                Err(err) => {
                    warn!(%err, "discarding persisted cart: unparsable snapshot");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(%err, "cart store unreadable at startup, starting empty");
                Cart::new()
            }
        };
        Self {
            catalog,
            store,
            cart: Mutex::new(cart),
        }
    }

    /// Read-only snapshot of the current cart for the consumer layer.
    pub async fn items(&self) -> Vec<CartItem> {
        self.cart.lock().await.items().to_vec()
    }

    /// Add one unit of a product. Increments the existing line against fresh
    /// stock, or appends a new line with amount 1 (a product the catalog
    /// knows about is assumed to have stock for its first unit).
    pub async fn add_product(&self, product_id: u64) -> Result<(), CartError> {
        let mut cart = self.cart.lock().await;
        let previous = cart.clone();

        match cart.position(product_id) {
            Some(index) => {
                let next = cart.amount_at(index) + 1;
                let stock = self
                    .catalog
                    .stock(product_id)
                    .await
                    .map_err(CartError::from_catalog)?;
                if next > stock {
                    return Err(CartError::OutOfStock { product_id });
                }
                cart.set_amount(index, next);
            }
            None => {
                let product = self
                    .catalog
                    .product(product_id)
                    .await
                    .map_err(CartError::from_catalog)?;
                cart.push(CartItem { product, amount: 1 });
            }
        }

        self.persist_or_rollback(&mut cart, previous).await
    }

    /// Remove a product's line entirely. Rejects with ItemNotInCart when the
    /// id is absent; repeated calls keep rejecting without changing anything.
    pub async fn remove_product(&self, product_id: u64) -> Result<(), CartError> {
        let mut cart = self.cart.lock().await;
        let Some(index) = cart.position(product_id) else {
            return Err(CartError::ItemNotInCart { product_id });
        };
        let previous = cart.clone();
        cart.remove(index);

        self.persist_or_rollback(&mut cart, previous).await
    }

    /// Set a product's amount to an absolute value. Amounts below 1 are a
    /// caller-level no-op, not an error. The check order mirrors the rest of
    /// the flow: amount guard, stock ceiling, cart membership.
    pub async fn update_product_amount(
        &self,
        product_id: u64,
        amount: u32,
    ) -> Result<(), CartError> {
        if amount < 1 {
            return Ok(());
        }

        let mut cart = self.cart.lock().await;

        let stock = self
            .catalog
            .stock(product_id)
            .await
            .map_err(CartError::from_catalog)?;
        if amount > stock {
            return Err(CartError::OutOfStock { product_id });
        }

        let Some(index) = cart.position(product_id) else {
            return Err(CartError::ItemNotInCart { product_id });
        };
        let previous = cart.clone();
        cart.set_amount(index, amount);

        self.persist_or_rollback(&mut cart, previous).await
    }

    async fn persist_or_rollback(
        &self,
        cart: &mut Cart,
        previous: Cart,
    ) -> Result<(), CartError> {
        let blob = serde_json::to_string(&*cart)
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        if let Err(err) = self.store.write(CART_STORAGE_KEY, &blob).await {
            warn!(%err, "cart snapshot write failed, rolling back mutation");
            *cart = previous;
            return Err(CartError::Storage(err));
        }
        Ok(())
    }
}

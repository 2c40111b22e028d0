// Cart domain types.
//
// Purpose
// - Model the cart as an ordered, product-unique collection of items.
//
// Responsibilities
// - Keep the structural invariants checkable in one place: no duplicate
//   product ids, every amount at least 1.
// - Serialize to the external snapshot format: a bare JSON array of items,
//   product metadata flattened next to the amount.
//
// Boundaries
// - No stock checks or persistence here. The cart manager owns those.

use serde::{Deserialize, Serialize};

/// Product metadata as reported by the catalog. Opaque to the cart manager
/// beyond the id; carried along so the consumer layer can render items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

/// Ordered sequence of cart items, unique by product id. Insertion order is
/// preserved for display; it carries no other meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, product_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    pub(crate) fn position(&self, product_id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.product.id == product_id)
    }

    pub(crate) fn amount_at(&self, index: usize) -> u32 {
        self.items[index].amount
    }

    pub(crate) fn set_amount(&mut self, index: usize, amount: u32) {
        self.items[index].amount = amount;
    }

    pub(crate) fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, index: usize) -> CartItem {
        self.items.remove(index)
    }

    /// Structural validity: unique product ids and every amount >= 1.
    /// Hydration discards any snapshot that fails this.
    pub fn is_structurally_valid(&self) -> bool {
        let unique = self
            .items
            .iter()
            .enumerate()
            .all(|(i, item)| !self.items[..i].iter().any(|seen| seen.product.id == item.product.id));
        unique && self.items.iter().all(|item| item.amount >= 1)
    }
}

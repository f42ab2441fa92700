//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::products::models::ProductUuid;

/// A shopper's cart, keyed by their session.
///
/// Carts are stored as single documents: the lines live in a JSONB column and
/// are rewritten wholesale on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub session_id: String,
    pub items: Vec<CartLine>,
    pub total: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    /// An empty cart for a session that has nothing stored yet.
    #[must_use]
    pub fn empty(session_id: String, now: Timestamp) -> Self {
        Self {
            session_id,
            items: Vec::new(),
            total: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Resets the total to the sum of quantity times captured price over
    /// every line. Must be called after any change to the lines.
    pub fn recompute_total(&mut self) {
        self.total = self
            .items
            .iter()
            .map(|line| u64::from(line.quantity) * line.base_price)
            .sum();
    }
}

/// One product line within a cart.
///
/// `base_price` is the unit price captured when the line was first added. It
/// does not change if the catalogue price changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub base_price: u64,
}

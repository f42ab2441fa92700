//! Order Models

use jiff::Timestamp;
use serde_json::Value;

use crate::{domain::carts::models::CartLine, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Status every order starts in. No later transitions exist yet.
pub const ORDER_STATUS_PENDING: &str = "pending";

/// A placed order. Orders are immutable once written.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub session_id: String,
    pub items: Vec<CartLine>,
    pub total: u64,
    pub customer_info: Value,
    pub status: String,
    pub created_at: Timestamp,
}

/// Data needed to place an order.
///
/// The lines and the total come from the session's stored cart, never from
/// the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub session_id: String,
    pub customer_info: Value,
}

//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use petstore_app::domain::carts::models::{Cart, CartLine};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The product the line refers to
    pub product_id: Uuid,

    /// The number of units in the line
    pub quantity: u32,

    /// The unit price captured when the line was added, in pence/cents
    pub price: u64,
}

impl From<CartLine> for CartItemResponse {
    fn from(line: CartLine) -> Self {
        CartItemResponse {
            product_id: line.product_uuid.into(),
            quantity: line.quantity,
            price: line.base_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The session the cart belongs to
    pub session_id: String,

    /// The line items, in insertion order
    pub items: Vec<CartItemResponse>,

    /// The sum of quantity times captured price over all lines, in pence/cents
    pub total: u64,

    /// The date and time the cart was first written
    pub created_at: String,

    /// The date and time the cart last changed
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            session_id: cart.session_id,
            items: cart.items.into_iter().map(Into::into).collect(),
            total: cart.total,
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// Get Cart Handler
///
/// Returns the cart for a session, or an empty cart if the session has
/// never stored one.
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(
    session: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(session.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use petstore_app::domain::carts::CartsServiceError;

use crate::{
    carts::{errors, get::CartResponse},
    extensions::*,
    state::State,
};

/// Item Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemAddedResponse {
    /// Outcome description
    pub message: String,

    /// The cart after the change
    pub cart: CartResponse,
}

fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        // The cart is created on demand, so the only thing that can be
        // missing here is the product.
        CartsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        error => errors::into_status_error(error),
    }
}

/// Add Cart Item Handler
///
/// Adds a quantity of a product to the session's cart, capturing the
/// product's current price. The quantity defaults to one.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item added to cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    session: PathParam<String>,
    product_id: QueryParam<String, true>,
    quantity: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ItemAddedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product_id.into_inner().into_product_uuid()?;
    let quantity = quantity.into_inner().unwrap_or(1);

    let cart = state
        .app
        .carts
        .add_item(session.into_inner(), product, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ItemAddedResponse {
        message: "Item added to cart".to_string(),
        cart: cart.into(),
    }))
}

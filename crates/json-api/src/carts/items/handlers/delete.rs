//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Item Removed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemRemovedResponse {
    /// Outcome description
    pub message: String,
}

/// Remove Cart Item Handler
///
/// Drops a product's line from the session's cart. Removing a product that
/// is not in the cart leaves the cart unchanged.
#[endpoint(
    tags("carts"),
    summary = "Remove Item from Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item removed from cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    session: PathParam<String>,
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ItemRemovedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner().into_product_uuid()?;

    state
        .app
        .carts
        .remove_item(session.into_inner(), product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ItemRemovedResponse {
        message: "Item removed from cart".to_string(),
    }))
}

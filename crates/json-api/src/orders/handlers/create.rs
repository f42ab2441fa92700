//! Create Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use petstore_app::domain::orders::models::NewOrder;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Create Order Request
///
/// Clients historically sent the cart lines and a total along with the
/// order. Both are ignored here: the order is built from the session's
/// stored cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// The session whose cart is being ordered
    pub session_id: String,

    /// Free-form contact and delivery details
    #[serde(default)]
    pub customer_info: Value,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            session_id: request.session_id,
            customer_info: request.customer_info,
        }
    }
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderCreatedResponse {
    /// Outcome description
    pub message: String,

    /// The identifier of the new order
    pub order_id: Uuid,
}

/// Create Order Handler
///
/// Places an order from the session's stored cart and deletes the cart.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::OK, description = "Order created"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .create_order(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderCreatedResponse {
        message: "Order created successfully".to_string(),
        order_id: order.uuid.into(),
    }))
}

//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use petstore_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("failed to create order: {source}");

            StatusError::internal_server_error()
        }
        // Placing an order needs a stored cart for the session.
        OrdersServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
    }
}

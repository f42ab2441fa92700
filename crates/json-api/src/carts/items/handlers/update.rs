//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
    state::State,
};

/// Cart Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartUpdatedResponse {
    /// Outcome description
    pub message: String,

    /// The cart after the change
    pub cart: CartResponse,
}

/// Update Cart Item Handler
///
/// Sets the quantity of a line in the session's cart. A quantity of zero or
/// less removes the line; a product that is not in the cart is left alone.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    session: PathParam<String>,
    product_id: QueryParam<String, true>,
    quantity: QueryParam<i64, true>,
    depot: &mut Depot,
) -> Result<Json<CartUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product_id.into_inner().into_product_uuid()?;

    let cart = state
        .app
        .carts
        .update_item(session.into_inner(), product, quantity.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartUpdatedResponse {
        message: "Cart updated".to_string(),
        cart: cart.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use petstore_app::domain::carts::{CartsServiceError, MockCartsService};
    use petstore_app::domain::products::models::ProductUuid;

    use crate::test_helpers::{carts_service, make_cart, make_line};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(
            repo,
            Router::with_path("api/cart/{session}/update").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_returns_message_and_cart() -> TestResult {
        let mut repo = MockCartsService::new();
        let product = ProductUuid::new();

        let mut cart = make_cart("shopper-7");
        cart.items.push(make_line(product, 5, 10_00));
        cart.recompute_total();

        repo.expect_update_item()
            .once()
            .withf(move |session, p, quantity| {
                session == "shopper-7" && *p == product && *quantity == 5
            })
            .return_once(move |_, _, _| Ok(cart));

        repo.expect_get_cart().never();
        repo.expect_add_item().never();
        repo.expect_remove_item().never();

        let response: CartUpdatedResponse = TestClient::put(format!(
            "http://example.com/api/cart/shopper-7/update?product_id={product}&quantity=5"
        ))
        .send(&make_service(repo))
        .await
        .take_json()
        .await?;

        assert_eq!(response.message, "Cart updated");
        assert_eq!(response.cart.total, 50_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_forwards_negative_quantity() -> TestResult {
        let mut repo = MockCartsService::new();
        let product = ProductUuid::new();

        repo.expect_update_item()
            .once()
            .withf(move |_, _, quantity| *quantity == -2)
            .return_once(|session, _, _| Ok(make_cart(&session)));

        repo.expect_get_cart().never();
        repo.expect_add_item().never();
        repo.expect_remove_item().never();

        let res = TestClient::put(format!(
            "http://example.com/api/cart/shopper-7/update?product_id={product}&quantity=-2"
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();
        let product = ProductUuid::new();

        repo.expect_update_item()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        repo.expect_get_cart().never();
        repo.expect_add_item().never();
        repo.expect_remove_item().never();

        let res = TestClient::put(format!(
            "http://example.com/api/cart/no-such-session/update?product_id={product}&quantity=1"
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unparseable_product_returns_404_without_a_call() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_item().never();
        repo.expect_get_cart().never();
        repo.expect_add_item().never();
        repo.expect_remove_item().never();

        let res = TestClient::put(
            "http://example.com/api/cart/shopper-7/update?product_id=not-a-product&quantity=1",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_without_quantity_returns_400() -> TestResult {
        let mut repo = MockCartsService::new();
        let product = ProductUuid::new();

        repo.expect_update_item().never();
        repo.expect_get_cart().never();
        repo.expect_add_item().never();
        repo.expect_remove_item().never();

        let res = TestClient::put(format!(
            "http://example.com/api/cart/shopper-7/update?product_id={product}"
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

//! App Router

use salvo::Router;

use crate::{carts, orders, products};

/// Routes served under the `/api` prefix.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::with_path("cart").push(
                Router::with_path("{session}")
                    .get(carts::get::handler)
                    .push(Router::with_path("add").post(carts::items::create::handler))
                    .push(Router::with_path("update").put(carts::items::update::handler))
                    .push(
                        Router::with_path("remove/{product}").delete(carts::items::delete::handler),
                    ),
            ),
        )
        .push(Router::with_path("orders").post(orders::create::handler))
}

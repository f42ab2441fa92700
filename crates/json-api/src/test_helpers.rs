//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use serde_json::Value;

use petstore_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartLine},
        },
        orders::{
            MockOrdersService,
            models::{ORDER_STATUS_PENDING, Order, OrderUuid},
        },
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
    },
};

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: "Steam Cat Brush".to_string(),
        description: "A self-cleaning steam brush for cats".to_string(),
        price: 49_99,
        original_price: Some(79_99),
        category: "grooming".to_string(),
        features: vec!["Steam cleaning".to_string()],
        image_url: "https://images.example.com/brush.jpg".to_string(),
        images: vec!["https://images.example.com/brush.jpg".to_string()],
        rating: 4.8,
        reviews_count: 324,
        in_stock: true,
        discount_percentage: Some(38),
    }
}

pub(crate) fn make_cart(session_id: &str) -> Cart {
    Cart {
        session_id: session_id.to_string(),
        items: Vec::new(),
        total: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_line(product: ProductUuid, quantity: u32, base_price: u64) -> CartLine {
    CartLine {
        product_uuid: product,
        quantity,
        base_price,
    }
}

pub(crate) fn make_order(session_id: &str) -> Order {
    Order {
        uuid: OrderUuid::new(),
        session_id: session_id.to_string(),
        items: Vec::new(),
        total: 0,
        customer_info: Value::Null,
        status: ORDER_STATUS_PENDING.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_seed_products().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_item().never();
    carts.expect_remove_item().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_get_order().never();

    orders
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let app = AppContext {
        products: Arc::new(products),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(strict_orders_mock()),
    };

    service_with(app, route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    let app = AppContext {
        products: Arc::new(strict_products_mock()),
        carts: Arc::new(carts),
        orders: Arc::new(strict_orders_mock()),
    };

    service_with(app, route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    let app = AppContext {
        products: Arc::new(strict_products_mock()),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(orders),
    };

    service_with(app, route)
}

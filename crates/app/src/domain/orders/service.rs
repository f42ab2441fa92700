//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        carts::repository::PgCartsRepository,
        orders::{
            errors::OrdersServiceError,
            models::{NewOrder, ORDER_STATUS_PENDING, Order, OrderUuid},
            repository::PgOrdersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    carts_repository: PgCartsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            carts_repository: PgCartsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(
            session_id = %order.session_id,
            order_uuid = tracing::field::Empty,
            line_count = tracing::field::Empty
        ),
        err
    )]
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let Some(mut cart) = self
            .carts_repository
            .find_cart(&mut tx, &order.session_id)
            .await?
        else {
            return Err(OrdersServiceError::NotFound);
        };

        // The charge is never taken from the caller: the stored lines are
        // re-summed here.
        cart.recompute_total();

        let placed = Order {
            uuid: OrderUuid::new(),
            session_id: order.session_id,
            items: cart.items,
            total: cart.total,
            customer_info: order.customer_info,
            status: ORDER_STATUS_PENDING.to_string(),
            created_at: Timestamp::now(),
        };

        let span = Span::current();

        span.record("order_uuid", tracing::field::display(placed.uuid));
        span.record("line_count", tracing::field::display(placed.items.len()));

        self.orders_repository
            .create_order(&mut tx, &placed)
            .await?;

        self.carts_repository
            .delete_cart(&mut tx, &placed.session_id)
            .await?;

        tx.commit().await?;

        info!(order_uuid = %placed.uuid, total = placed.total, "created order");

        Ok(placed)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = self.orders_repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Place an order from the session's stored cart. The order snapshots
    /// the cart's lines, the total is recomputed from them, and the cart is
    /// deleted, all in one transaction. A session without a stored cart
    /// cannot order.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;
}

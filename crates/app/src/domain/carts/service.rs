//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartLine},
            repository::PgCartsRepository,
        },
        products::models::ProductUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, session_id: String) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.repository.find_cart(&mut tx, &session_id).await?;

        tx.commit().await?;

        Ok(cart.unwrap_or_else(|| Cart::empty(session_id, Timestamp::now())))
    }

    async fn add_item(
        &self,
        session_id: String,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        // RowNotFound here means the product does not exist.
        let base_price = self.repository.get_product_price(&mut tx, product).await?;

        let mut cart = self
            .repository
            .find_cart(&mut tx, &session_id)
            .await?
            .unwrap_or_else(|| Cart::empty(session_id, Timestamp::now()));

        match cart
            .items
            .iter_mut()
            .find(|line| line.product_uuid == product)
        {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartsServiceError::InvalidData)?;
            }
            None => cart.items.push(CartLine {
                product_uuid: product,
                quantity,
                base_price,
            }),
        }

        cart.recompute_total();
        cart.updated_at = Timestamp::now();

        self.repository.upsert_cart(&mut tx, &cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn update_item(
        &self,
        session_id: String,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let Some(mut cart) = self.repository.find_cart(&mut tx, &session_id).await? else {
            return Err(CartsServiceError::NotFound);
        };

        if quantity <= 0 {
            cart.items.retain(|line| line.product_uuid != product);
        } else {
            let Ok(quantity) = u32::try_from(quantity) else {
                return Err(CartsServiceError::InvalidData);
            };

            // A quantity for a product that is not in the cart is dropped
            // without complaint.
            if let Some(line) = cart
                .items
                .iter_mut()
                .find(|line| line.product_uuid == product)
            {
                line.quantity = quantity;
            }
        }

        cart.recompute_total();
        cart.updated_at = Timestamp::now();

        self.repository.upsert_cart(&mut tx, &cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        session_id: String,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let Some(mut cart) = self.repository.find_cart(&mut tx, &session_id).await? else {
            return Err(CartsServiceError::NotFound);
        };

        cart.items.retain(|line| line.product_uuid != product);

        cart.recompute_total();
        cart.updated_at = Timestamp::now();

        self.repository.upsert_cart(&mut tx, &cart).await?;

        tx.commit().await?;

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the cart for a session. A session with no stored cart gets
    /// an empty one back; nothing is written.
    async fn get_cart(&self, session_id: String) -> Result<Cart, CartsServiceError>;

    /// Add a quantity of a product to the session's cart, creating the cart
    /// if needed. The product's current price is captured on the new line;
    /// adding a product already in the cart merges into its line instead.
    async fn add_item(
        &self,
        session_id: String,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Set the quantity of a product's line. Zero or negative removes the
    /// line; a product with no line in the cart is left unchanged.
    async fn update_item(
        &self,
        session_id: String,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a product's line from the cart.
    async fn remove_item(
        &self,
        session_id: String,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError>;
}

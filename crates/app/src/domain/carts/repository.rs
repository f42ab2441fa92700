//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};

use crate::domain::{
    carts::models::{Cart, CartLine},
    products::models::ProductUuid,
};

const GET_CART_SQL: &str = include_str!("sql/get_cart.sql");
const UPSERT_CART_SQL: &str = include_str!("sql/upsert_cart.sql");
const DELETE_CART_SQL: &str = include_str!("sql/delete_cart.sql");
const GET_PRODUCT_PRICE_SQL: &str = include_str!("sql/get_product_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session_id: &str,
    ) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(GET_CART_SQL)
            .bind(session_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Writes the whole cart document, replacing any stored lines and total.
    /// An existing row keeps its `created_at`.
    pub(crate) async fn upsert_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &Cart,
    ) -> Result<(), sqlx::Error> {
        let total = to_stored_amount(cart.total, "total")?;

        query(UPSERT_CART_SQL)
            .bind(&cart.session_id)
            .bind(Json(&cart.items))
            .bind(total)
            .bind(SqlxTimestamp::from(cart.created_at))
            .bind(SqlxTimestamp::from(cart.updated_at))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_SQL)
            .bind(session_id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Current catalogue price for the product, captured into new cart lines.
    pub(crate) async fn get_product_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let (price,): (i64,) = query_as(GET_PRODUCT_PRICE_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total = try_get_amount(row, "total")?;

        Ok(Self {
            session_id: row.try_get("session_id")?,
            items: row.try_get::<Json<Vec<CartLine>>, _>("items")?.0,
            total,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn to_stored_amount(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

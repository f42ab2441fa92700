//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{Product, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self
            .repository
            .list_products(&mut tx, category.as_deref())
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn seed_products(&self, products: Vec<Product>) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let existing = self.repository.count_products(&mut tx).await?;

        if existing > 0 {
            tx.commit().await?;

            return Ok(0);
        }

        let mut inserted = 0;

        for product in &products {
            self.repository.insert_product(&mut tx, product).await?;
            inserted += 1;
        }

        tx.commit().await?;

        Ok(inserted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the catalogue, optionally filtered to a single category.
    async fn list_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Writes the given products only when the catalogue is empty, returning
    /// how many rows were inserted.
    async fn seed_products(&self, products: Vec<Product>) -> Result<u64, ProductsServiceError>;
}

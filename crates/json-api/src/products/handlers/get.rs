//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use petstore_app::domain::products::models::Product;

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// The display name of the product
    pub name: String,

    /// The long-form product description
    pub description: String,

    /// The price of the product in pence/cents
    pub price: u64,

    /// The pre-discount price in pence/cents, if the product is discounted
    pub original_price: Option<u64>,

    /// The catalogue category the product belongs to
    pub category: String,

    /// The product's selling points
    pub features: Vec<String>,

    /// The primary image URL
    pub image_url: String,

    /// Every image URL, primary first
    pub images: Vec<String>,

    /// The average review rating
    pub rating: f64,

    /// The number of reviews behind the rating
    pub reviews_count: u32,

    /// Whether the product is currently purchasable
    pub in_stock: bool,

    /// The discount against the original price, in percent
    pub discount_percentage: Option<u32>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            original_price: product.original_price,
            category: product.category,
            features: product.features,
            image_url: product.image_url,
            images: product.images,
            rating: product.rating,
            reviews_count: product.reviews_count,
            in_stock: product.in_stock,
            discount_percentage: product.discount_percentage,
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner().into_product_uuid()?;

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

//! Product Models

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
///
/// Catalog records are immutable after seeding, so one shape serves both
/// inserts and reads and there are no row timestamps. All amounts are in
/// minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub original_price: Option<u64>,
    pub category: String,
    pub features: Vec<String>,
    pub image_url: String,
    pub images: Vec<String>,
    pub rating: f64,
    pub reviews_count: u32,
    pub in_stock: bool,
    pub discount_percentage: Option<u32>,
}

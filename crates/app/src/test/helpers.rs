//! Builders for common test fixtures.

use crate::domain::products::models::{Product, ProductUuid};

/// A catalogue product with the given name, category, and minor-unit price.
pub fn sample_product(name: &str, category: &str, price: u64) -> Product {
    Product {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        description: format!("{name} for discerning pets"),
        price,
        original_price: None,
        category: category.to_string(),
        features: vec![format!("{name} feature")],
        image_url: "https://images.example.com/placeholder".to_string(),
        images: vec!["https://images.example.com/placeholder".to_string()],
        rating: 4.5,
        reviews_count: 12,
        in_stock: true,
        discount_percentage: None,
    }
}

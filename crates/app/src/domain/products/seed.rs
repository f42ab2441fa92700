//! Launch catalogue seeded into an empty products table.

use super::models::{Product, ProductUuid};

/// Products written on first boot. Prices are in minor units.
#[must_use]
pub fn initial_products() -> Vec<Product> {
    vec![
        Product {
            uuid: ProductUuid::new(),
            name: "Steam Cat Brush - Professional Grooming Tool".to_string(),
            description: "Revolutionary steam-powered cat brush that gently removes loose fur \
                          while providing a soothing spa-like experience. The gentle steam helps \
                          to moisturize your cat's skin and makes grooming easier and more \
                          enjoyable for both you and your feline friend."
                .to_string(),
            price: 4999,
            original_price: Some(7999),
            category: "grooming".to_string(),
            features: vec![
                "Steam-powered grooming technology".to_string(),
                "Gentle on sensitive cat skin".to_string(),
                "Removes 95% of loose fur".to_string(),
                "Reduces shedding significantly".to_string(),
                "Easy-to-clean design".to_string(),
                "Safe and comfortable for cats".to_string(),
                "Battery powered - cordless operation".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1747176779062-4e800093611e".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1747176779062-4e800093611e".to_string(),
            ],
            rating: 4.8,
            reviews_count: 324,
            in_stock: true,
            discount_percentage: Some(38),
        },
        Product {
            uuid: ProductUuid::new(),
            name: "3-in-1 Pet Bowl with Automatic Water Feeder".to_string(),
            description: "The ultimate feeding solution for your pets! This innovative 3-in-1 \
                          system combines a food bowl, water bowl, and automatic water dispenser \
                          in one sleek design. Perfect for cats and small dogs, ensuring your pet \
                          always has fresh water available."
                .to_string(),
            price: 3499,
            original_price: Some(5999),
            category: "feeding".to_string(),
            features: vec![
                "3-in-1 design: food bowl + water bowl + dispenser".to_string(),
                "Automatic water refill system".to_string(),
                "Non-slip base for stability".to_string(),
                "Easy to clean and refill".to_string(),
                "Food-grade materials".to_string(),
                "Perfect height for cats and small dogs".to_string(),
                "1.5L water capacity".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1695023267262-7f4ab64152b2".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1695023267262-7f4ab64152b2".to_string(),
                "https://images.unsplash.com/photo-1670361921890-2eb8045a6411".to_string(),
                "https://images.unsplash.com/photo-1691130340089-bf83873e89ab".to_string(),
            ],
            rating: 4.6,
            reviews_count: 187,
            in_stock: true,
            discount_percentage: Some(42),
        },
    ]
}

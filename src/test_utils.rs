//! Shared test utilities for `ShopShelf`.
//!
//! This module provides common helper functions for setting up temp-dir
//! backed stores and creating test entities with sensible defaults.

#![allow(clippy::expect_used)]

use crate::entities::{Category, Product, Review};
use crate::store::BlobStore;
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

/// A three-product catalog spanning three categories and a wide price range.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Gaming Laptop".to_string(),
            description: "High-performance laptop for gaming enthusiasts.".to_string(),
            category: Category::Electronics,
            price: 1200.0,
            image_url: "https://example.com/laptop.jpg".to_string(),
        },
        Product {
            id: 2,
            name: "Summer Dress".to_string(),
            description: "Elegant summer dress for women.".to_string(),
            category: Category::Clothing,
            price: 60.0,
            image_url: "https://example.com/dress.jpg".to_string(),
        },
        Product {
            id: 10,
            name: "Yoga Mat".to_string(),
            description: "Non-slip yoga mat for exercise.".to_string(),
            category: Category::Sports,
            price: 30.0,
            image_url: "https://example.com/mat.jpg".to_string(),
        },
    ]
}

/// Creates a test review with a fixed timestamp and placeholder text.
pub fn sample_review(id: i64, user_id: i64, product_id: i64, rating: u8) -> Review {
    sample_review_with_text(id, user_id, product_id, rating, "solid product overall")
}

/// Creates a test review with explicit body text.
pub fn sample_review_with_text(
    id: i64,
    user_id: i64,
    product_id: i64,
    rating: u8,
    text: &str,
) -> Review {
    Review {
        id,
        user_id,
        product_id,
        rating,
        review_text: text.to_string(),
        photo_url: None,
        created_at: Utc
            .with_ymd_and_hms(2024, 5, 17, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

/// Opens a store in a fresh temporary directory, seeded with
/// [`sample_catalog`]. The `TempDir` is returned alongside so the directory
/// outlives the store.
pub fn setup_seeded_store() -> (TempDir, BlobStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut store = BlobStore::open(dir.path()).expect("open store");
    store
        .seed_products(sample_catalog())
        .expect("seed catalog");
    (dir, store)
}

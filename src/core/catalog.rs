//! Catalog browsing - search, category filter, and sorting.
//!
//! Mirrors the listing page: an optional case-insensitive search over name
//! and description, an optional category restriction, and one of four sort
//! orders. Filters apply before the sort; the rating sort averages each
//! product's reviews through [`crate::core::rating`].

use crate::core::rating;
use crate::entities::{Category, Product, Review};
use crate::errors::Error;
use std::str::FromStr;

/// Sort order of the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Alphabetical by product name (the default)
    #[default]
    Name,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Best average rating first
    Rating,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            other => Err(Error::Config {
                message: format!(
                    "Unknown sort '{other}' (expected name, price-low, price-high or rating)"
                ),
            }),
        }
    }
}

/// A browse request against the catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against name or description
    pub search: Option<String>,
    /// Restrict the listing to one category
    pub category: Option<Category>,
    /// Sort order applied after filtering
    pub sort: SortKey,
}

/// Applies search, category filter, and sort to the catalog and returns the
/// resulting listing.
#[must_use]
pub fn browse(products: &[Product], reviews: &[Review], query: &CatalogQuery) -> Vec<Product> {
    let mut listing: Vec<Product> = products
        .iter()
        .filter(|product| matches(product, query))
        .cloned()
        .collect();

    match query.sort {
        SortKey::Name => {
            listing.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::PriceLow => listing.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => listing.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => listing.sort_by(|a, b| {
            average_rating(reviews, b.id).total_cmp(&average_rating(reviews, a.id))
        }),
    }

    listing
}

fn matches(product: &Product, query: &CatalogQuery) -> bool {
    if let Some(term) = &query.search {
        let term = term.to_lowercase();
        if !product.name.to_lowercase().contains(&term)
            && !product.description.to_lowercase().contains(&term)
        {
            return false;
        }
    }

    if let Some(category) = query.category
        && product.category != category
    {
        return false;
    }

    true
}

fn average_rating(reviews: &[Review], product_id: i64) -> f64 {
    rating::aggregate(reviews.iter().filter(|r| r.product_id == product_id)).average
}

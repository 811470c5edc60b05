//! Seed catalog loading from config.toml
//!
//! The products offered by the storefront are defined in a TOML file and
//! installed into the store on first run, when the catalog blob does not
//! exist yet. Later runs leave the persisted catalog untouched.

use crate::entities::Product;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Products installed into an empty store
    pub products: Vec<Product>,
}

/// Loads the seed catalog from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing or a category is outside the fixed set
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed catalog: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed catalog: {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::Category;

    #[test]
    fn test_parse_seed_catalog() {
        let toml_str = r#"
            [[products]]
            id = 1
            name = "Gaming Laptop"
            description = "High-performance laptop for gaming enthusiasts."
            category = "electronics"
            price = 1200.0
            imageUrl = "https://example.com/laptop.jpg"

            [[products]]
            id = 4
            name = "The Great Gatsby"
            description = "Classic novel by F. Scott Fitzgerald."
            category = "books"
            price = 15.0
            imageUrl = "https://example.com/gatsby.jpg"
        "#;

        let config: CatalogConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[0].name, "Gaming Laptop");
        assert_eq!(config.products[0].category, Category::Electronics);
        assert_eq!(config.products[0].price, 1200.0);
        assert_eq!(config.products[1].id, 4);
        assert_eq!(config.products[1].category, Category::Books);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let toml_str = r#"
            [[products]]
            id = 1
            name = "Mystery Item"
            description = "No such shelf."
            category = "gadgets"
            price = 9.99
            imageUrl = "https://example.com/mystery.jpg"
        "#;

        assert!(toml::from_str::<CatalogConfig>(toml_str).is_err());
    }
}

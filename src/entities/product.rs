//! Product entity - Represents one item of the seeded catalog.
//!
//! Products are static: they are installed once from the seed catalog on
//! first run and never mutated afterwards. Reviews reference them by id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Catalog product model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for the product
    pub id: i64,
    /// Display name (e.g., "Gaming Laptop")
    pub name: String,
    /// Short marketing description shown on the listing
    pub description: String,
    /// One of the fixed category set
    pub category: Category,
    /// Price in dollars
    pub price: f64,
    /// Image location, carried as an opaque string
    pub image_url: String,
}

/// The fixed set of product categories.
///
/// Serialized in lowercase (`"electronics"`, ...) to match the catalog blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Books,
    Sports,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Electronics,
        Self::Clothing,
        Self::Home,
        Self::Books,
        Self::Sports,
    ];

    /// Human-readable label, as shown next to the category filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Home => "Home & Garden",
            Self::Books => "Books",
            Self::Sports => "Sports",
        }
    }

    /// Identifier used in the blob and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Home => "home",
            Self::Books => "books",
            Self::Sports => "sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "electronics" => Ok(Self::Electronics),
            "clothing" => Ok(Self::Clothing),
            "home" => Ok(Self::Home),
            "books" => Ok(Self::Books),
            "sports" => Ok(Self::Sports),
            other => Err(Error::Config {
                message: format!("Unknown category '{other}'"),
            }),
        }
    }
}

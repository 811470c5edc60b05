//! Review entity - One user's review of one product.
//!
//! Reviews are append-only: once created they are never updated or deleted.
//! The full review set for a product is the filter of the review collection
//! by `product_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique identifier, generated at submission time
    pub id: i64,
    /// Id of the reviewing user
    pub user_id: i64,
    /// Id of the reviewed product
    pub product_id: i64,
    /// Star rating, 1-5
    pub rating: u8,
    /// Free-text body of the review
    pub review_text: String,
    /// Optional photo reference; omitted from the blob when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// When the review was submitted (ISO-8601 on the wire)
    pub created_at: DateTime<Utc>,
}

//! Review submission business logic.
//!
//! Validation happens here, not in the shell: the shell only turns the
//! resulting errors into user-visible messages. Accepted reviews get a fresh
//! id and a UTC timestamp and are appended to the store, which persists the
//! review blob immediately.

use crate::entities::Review;
use crate::errors::{Error, Result};
use crate::store::BlobStore;
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::info;

/// Largest accepted photo attachment, in bytes (10 MB).
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

/// A photo staged for attachment to a review.
///
/// The size limit is enforced when the photo is staged, so a
/// `PhotoAttachment` that exists has already passed the check.
#[derive(Debug, Clone)]
pub struct PhotoAttachment {
    /// Reference stored on the review (`photoUrl` in the blob)
    pub url: String,
    /// File size in bytes at staging time
    pub size_bytes: u64,
}

impl PhotoAttachment {
    /// Stages a photo from a local file, reading its size from metadata.
    ///
    /// # Errors
    /// Returns an error if the file cannot be inspected or is larger than
    /// [`MAX_PHOTO_BYTES`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let metadata = fs::metadata(path.as_ref())?;
        let size_bytes = metadata.len();
        if size_bytes > MAX_PHOTO_BYTES {
            return Err(Error::PhotoTooLarge {
                size: size_bytes,
                max: MAX_PHOTO_BYTES,
            });
        }

        Ok(Self {
            url: path.as_ref().display().to_string(),
            size_bytes,
        })
    }
}

/// True if `user_id` has already reviewed `product_id`.
#[must_use]
pub fn has_user_reviewed(reviews: &[Review], user_id: i64, product_id: i64) -> bool {
    reviews
        .iter()
        .any(|r| r.user_id == user_id && r.product_id == product_id)
}

/// Validates and appends a new review.
///
/// # Errors
/// Returns an error if:
/// - The review text is empty or whitespace-only
/// - The rating is outside 1-5 (a zero rating is "no stars selected")
/// - No product with `product_id` exists
/// - The user has already reviewed this product
/// - The review blob cannot be written
pub fn submit_review(
    store: &mut BlobStore,
    user_id: i64,
    product_id: i64,
    rating: u8,
    text: &str,
    photo: Option<PhotoAttachment>,
) -> Result<Review> {
    if text.trim().is_empty() {
        return Err(Error::EmptyReviewText);
    }
    if !(1..=5).contains(&rating) {
        return Err(Error::InvalidRating { rating });
    }
    if store.product_by_id(product_id).is_none() {
        return Err(Error::ProductNotFound { id: product_id });
    }
    if has_user_reviewed(store.reviews(), user_id, product_id) {
        return Err(Error::AlreadyReviewed {
            user_id,
            product_id,
        });
    }

    let review = Review {
        id: store.next_review_id(),
        user_id,
        product_id,
        rating,
        review_text: text.to_string(),
        photo_url: photo.map(|p| p.url),
        created_at: Utc::now(),
    };

    store.append_review(review.clone())?;
    info!(review_id = review.id, product_id, rating, "Review submitted");
    Ok(review)
}

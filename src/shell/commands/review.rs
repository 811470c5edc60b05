//! Product detail and review submission commands.

use super::split_token;
use crate::core::review::{self, PhotoAttachment};
use crate::core::{rating, tags};
use crate::errors::{Error, Result};
use crate::store::BlobStore;
use std::fmt::Write as _;

/// `show <product-id>` - product detail with rating, tags, and reviews.
pub fn cmd_show(store: &BlobStore, args: &str) -> Result<String> {
    let id: i64 = args.trim().parse().map_err(|_| Error::Config {
        message: "Usage: show <product-id>".to_string(),
    })?;
    let product = store
        .product_by_id(id)
        .ok_or(Error::ProductNotFound { id })?;

    let reviews = store.reviews_for_product(id);
    let summary = rating::aggregate(reviews.iter().copied());
    let tag_list = tags::review_tags(reviews.iter().copied());

    let mut reply = String::new();
    let _ = writeln!(
        reply,
        "{}  [{}]  ${:.2}",
        product.name,
        product.category.label(),
        product.price
    );
    let _ = writeln!(reply, "{}", product.description);
    if summary.count == 0 {
        let _ = writeln!(reply, "No ratings");
    } else {
        let _ = writeln!(
            reply,
            "{:.1} stars ({} review{})",
            summary.average,
            summary.count,
            if summary.count == 1 { "" } else { "s" }
        );
    }
    if !tag_list.is_empty() {
        let _ = writeln!(reply, "Popular tags: {}", tag_list.join(", "));
    }

    let _ = writeln!(reply);
    if reviews.is_empty() {
        let _ = write!(reply, "No reviews yet. Be the first to review this product!");
    } else {
        let _ = writeln!(reply, "Customer reviews ({}):", reviews.len());
        for review in &reviews {
            let _ = writeln!(
                reply,
                "  [{}] User {} - {} star{}",
                review.created_at.format("%Y-%m-%d"),
                review.user_id,
                review.rating,
                if review.rating == 1 { "" } else { "s" }
            );
            let _ = writeln!(reply, "    {}", review.review_text);
            if let Some(photo) = &review.photo_url {
                let _ = writeln!(reply, "    photo: {photo}");
            }
        }
    }

    Ok(reply.trim_end().to_string())
}

/// `review <product-id> <stars> [photo=PATH] <text...>`
pub fn cmd_review(store: &mut BlobStore, user_id: i64, args: &str) -> Result<String> {
    let (id_tok, rest) = split_token(args);
    let (rating_tok, rest) = split_token(rest);

    let product_id: i64 = id_tok.parse().map_err(|_| usage_error())?;
    let rating: u8 = rating_tok.parse().map_err(|_| usage_error())?;

    let (photo, text) = match rest.strip_prefix("photo=") {
        Some(stripped) => {
            let (path, text) = split_token(stripped);
            (Some(PhotoAttachment::from_path(path)?), text)
        }
        None => (None, rest),
    };

    let review = review::submit_review(store, user_id, product_id, rating, text, photo)?;
    Ok(format!(
        "✅ Your review has been submitted! (review #{}, {} stars)",
        review.id, review.rating
    ))
}

fn usage_error() -> Error {
    Error::Config {
        message: "Usage: review <product-id> <stars 1-5> [photo=PATH] <review text...>".to_string(),
    }
}

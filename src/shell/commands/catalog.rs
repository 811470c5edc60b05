//! Catalog listing command.

use crate::core::catalog::{self, CatalogQuery};
use crate::core::rating;
use crate::errors::{Error, Result};
use crate::store::BlobStore;
use std::fmt::Write as _;

/// `list [search=TERM] [category=NAME] [sort=KEY]`
pub fn cmd_list(store: &BlobStore, args: &str) -> Result<String> {
    let mut query = CatalogQuery::default();

    for token in args.split_whitespace() {
        if let Some(term) = token.strip_prefix("search=") {
            query.search = Some(term.to_string());
        } else if let Some(name) = token.strip_prefix("category=") {
            query.category = Some(name.parse()?);
        } else if let Some(key) = token.strip_prefix("sort=") {
            query.sort = key.parse()?;
        } else {
            return Err(Error::Config {
                message: format!("Unexpected argument '{token}' (see 'help')"),
            });
        }
    }

    let listing = catalog::browse(store.products(), store.reviews(), &query);
    if listing.is_empty() {
        return Ok("No products found matching your criteria.".to_string());
    }

    let mut reply = String::new();
    for product in &listing {
        let summary = rating::aggregate(store.reviews_for_product(product.id));
        let stars = if summary.count == 0 {
            "no ratings yet".to_string()
        } else {
            format!("{:.1} stars ({})", summary.average, summary.count)
        };
        let price = format!("${:.2}", product.price);
        let _ = writeln!(
            reply,
            "{:>4}  {:<28} {:>10}  {:<13} {}",
            product.id,
            product.name,
            price,
            product.category.label(),
            stars
        );
    }
    let _ = write!(reply, "{} product(s)", listing.len());

    Ok(reply)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::review::submit_review;
    use crate::test_utils::setup_seeded_store;

    #[test]
    fn test_list_defaults_to_name_order() {
        let (_dir, store) = setup_seeded_store();
        let reply = cmd_list(&store, "").unwrap();

        let laptop = reply.find("Gaming Laptop").unwrap();
        let dress = reply.find("Summer Dress").unwrap();
        let mat = reply.find("Yoga Mat").unwrap();
        assert!(laptop < dress && dress < mat);
        assert!(reply.contains("3 product(s)"));
        assert!(reply.contains("no ratings yet"));
    }

    #[test]
    fn test_list_with_filters_and_rating() {
        let (_dir, mut store) = setup_seeded_store();
        submit_review(&mut store, 1, 2, 5, "beautiful color", None).unwrap();

        let reply = cmd_list(&store, "category=clothing").unwrap();
        assert!(reply.contains("Summer Dress"));
        assert!(!reply.contains("Yoga Mat"));
        assert!(reply.contains("5.0 stars (1)"));

        let reply = cmd_list(&store, "search=laptop sort=price-high").unwrap();
        assert!(reply.contains("Gaming Laptop"));
        assert!(reply.contains("1 product(s)"));
    }

    #[test]
    fn test_list_with_no_matches() {
        let (_dir, store) = setup_seeded_store();
        let reply = cmd_list(&store, "search=zeppelin").unwrap();
        assert_eq!(reply, "No products found matching your criteria.");
    }

    #[test]
    fn test_list_rejects_unknown_arguments() {
        let (_dir, store) = setup_seeded_store();
        assert!(cmd_list(&store, "order=price").is_err());
        assert!(cmd_list(&store, "category=gadgets").is_err());
    }
}

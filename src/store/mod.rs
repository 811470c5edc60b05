//! Blob store - the persistence layer behind the catalog and the reviews.
//!
//! Two named JSON documents live in a data directory: one holding the whole
//! product catalog, one holding the whole review collection. Both are read
//! once when the store opens and mirrored by in-memory lists; every mutation
//! rewrites the affected blob in full. Last write wins. The store is used
//! from a single thread, so there is no locking.

use crate::entities::{Product, Review};
use crate::errors::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the catalog blob.
pub const PRODUCTS_BLOB: &str = "products.json";

/// File name of the review collection blob.
pub const REVIEWS_BLOB: &str = "reviews.json";

/// The catalog and review store.
pub struct BlobStore {
    dir: PathBuf,
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl BlobStore {
    /// Opens the store at `dir`, creating the directory if needed and
    /// reading both blobs. A missing blob is treated as an empty collection.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, a blob cannot be
    /// read, or a blob exists but holds malformed JSON.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let products = read_blob(&dir.join(PRODUCTS_BLOB))?;
        let reviews = read_blob(&dir.join(REVIEWS_BLOB))?;
        debug!(
            products = products.len(),
            reviews = reviews.len(),
            "Opened blob store at {}",
            dir.display()
        );

        Ok(Self {
            dir,
            products,
            reviews,
        })
    }

    /// Installs the seed catalog when the store holds no products yet.
    ///
    /// Returns `true` if the seed was installed, `false` if a catalog was
    /// already present (in which case the persisted one is left untouched).
    ///
    /// # Errors
    /// Returns an error if the catalog blob cannot be written.
    pub fn seed_products(&mut self, seed: Vec<Product>) -> Result<bool> {
        if !self.products.is_empty() {
            debug!("Catalog already present, skipping seed");
            return Ok(false);
        }

        self.products = seed;
        self.write_products()?;
        info!(count = self.products.len(), "Seeded product catalog");
        Ok(true)
    }

    /// The full product catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Every review ever submitted, in submission order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn product_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Reviews for one product, in submission order.
    #[must_use]
    pub fn reviews_for_product(&self, product_id: i64) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }

    /// The next unused review id.
    #[must_use]
    pub fn next_review_id(&self) -> i64 {
        self.reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Appends a review and rewrites the review blob.
    ///
    /// # Errors
    /// Returns an error if the review blob cannot be written.
    pub fn append_review(&mut self, review: Review) -> Result<()> {
        self.reviews.push(review);
        self.write_reviews()
    }

    fn write_products(&self) -> Result<()> {
        write_blob(&self.dir.join(PRODUCTS_BLOB), &self.products)
    }

    fn write_reviews(&self) -> Result<()> {
        write_blob(&self.dir.join(REVIEWS_BLOB), &self.reviews)
    }
}

fn read_blob<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).map_err(|e| Error::Store {
            message: format!("Malformed blob {}: {e}", path.display()),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn write_blob<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Product not found: {id}")]
    ProductNotFound { id: i64 },

    #[error("Review text cannot be empty")]
    EmptyReviewText,

    #[error("Rating must be between 1 and 5 stars, got {rating}")]
    InvalidRating { rating: u8 },

    #[error("Photo is too large: {size} bytes (maximum {max} bytes)")]
    PhotoTooLarge { size: u64, max: u64 },

    #[error("User {user_id} has already reviewed product {product_id}")]
    AlreadyReviewed { user_id: i64, product_id: i64 },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

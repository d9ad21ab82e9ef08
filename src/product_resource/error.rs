//! Error types for product operations.

use crate::framework::ClientError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product is not in the fetched catalogue.
    #[error("Product not found: {0}")]
    NotFound(u64),

    /// The remote call failed.
    #[error("Product API error: {0}")]
    Api(#[from] ClientError),
}

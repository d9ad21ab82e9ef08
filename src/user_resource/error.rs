//! Error types for user operations.

use crate::framework::ClientError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The remote call failed.
    #[error("User API error: {0}")]
    Api(#[from] ClientError),
}

//! Product resource: entity binding, error type and client factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::{ResourceClient, Transport};
use std::sync::Arc;

/// Creates a Product client bound to `collection_url`.
pub fn new(collection_url: impl Into<String>, transport: Arc<dyn Transport>) -> ProductClient {
    ProductClient::new(ResourceClient::new(collection_url, transport))
}

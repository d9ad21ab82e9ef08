//! Generic resource framework for collection-style REST APIs.
//!
//! This module provides the building blocks for type-safe clients that perform
//! CRUD operations against one remote collection per entity type.
//!
//! # Main Components
//!
//! - [`ApiEntity`] - Trait that remote resource types implement
//! - [`ResourceClient`] - Generic client bound to one collection URL
//! - [`Transport`] - The I/O seam, implemented by [`HttpTransport`]
//! - [`ClientError`] - Common error type
//!
//! # Testing
//!
//! See [`mock`] module for a scripted transport that needs no network.

pub mod core;
pub mod http;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use self::http::HttpTransport;

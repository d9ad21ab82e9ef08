//! # Core Resource Framework
//!
//! This module defines the generic building blocks for talking to a
//! collection-style REST resource.
//!
//! ## Key Types
//!
//! - [`ApiEntity`]: The trait that all remote resource types must implement.
//! - [`ResourceRequest`]: One variant per CRUD verb, handed to a [`Transport`].
//! - [`Transport`]: The I/O seam (real HTTP in production, scripted in tests).
//! - [`ResourceClient`]: The generic client bound to one collection URL.
//! - [`ClientError`]: Transport, status and decoding failures.

use std::fmt::{Debug, Display};
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any remote entity must implement to be served by a [`ResourceClient`].
///
/// # Architecture Note
/// The client never looks inside an entity. It only needs to serialize it into a
/// request body, decode it back out of a response body, and know which collection
/// it lives under. Everything else about a `Product` or a `User` stays opaque, so
/// the request plumbing is written once and reused for every resource.
pub trait ApiEntity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// The identifier used in item URLs (`{base}/{id}`).
    type Id: Copy + Eq + Display + Debug + Send + Sync;

    /// Path segment of the collection under the API root (e.g. `"products"`).
    const COLLECTION: &'static str;

    /// The identifier carried by this instance.
    fn id(&self) -> Self::Id;
}

// =============================================================================
// 2. THE GENERIC REQUESTS & ERRORS
// =============================================================================

/// Errors produced while performing a remote call.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("Transport error: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    /// The response body did not decode into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

/// A single round trip against a collection resource.
///
/// # The CRUD Pattern
/// The variants map directly onto the verbs of a collection-style REST API:
///
/// - **List**: `GET {base}`
/// - **Create**: `POST {base}` with a JSON body
/// - **Update**: `PUT {base}/{id}` with a JSON body (full replacement)
/// - **Delete**: `DELETE {base}/{id}`
///
/// Bodies are already-serialized JSON so that a [`Transport`] stays object safe and
/// independent of the entity type.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceRequest {
    List { url: String },
    Create { url: String, body: Value },
    Update { url: String, body: Value },
    Delete { url: String },
}

impl ResourceRequest {
    /// The target URL of this request.
    pub fn url(&self) -> &str {
        match self {
            ResourceRequest::List { url }
            | ResourceRequest::Create { url, .. }
            | ResourceRequest::Update { url, .. }
            | ResourceRequest::Delete { url } => url,
        }
    }

    /// The HTTP verb name, used for logging.
    pub fn verb(&self) -> &'static str {
        match self {
            ResourceRequest::List { .. } => "GET",
            ResourceRequest::Create { .. } => "POST",
            ResourceRequest::Update { .. } => "PUT",
            ResourceRequest::Delete { .. } => "DELETE",
        }
    }

    /// The JSON body, if the verb carries one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ResourceRequest::Create { body, .. } | ResourceRequest::Update { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }
}

/// Executes [`ResourceRequest`]s and returns the decoded JSON response body.
///
/// An empty response body is reported as [`Value::Null`], and so is any body of
/// a successful `Delete`, whose outcome is judged on status alone.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ResourceRequest) -> Result<Value, ClientError>;
}

// =============================================================================
// 3. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for one collection resource.
///
/// # Error Policy
/// The operations do not all fail the same way:
///
/// - [`fetch_all`](Self::fetch_all) and [`create`](Self::create) return
///   `Result` and leave recovery to the caller.
/// - [`update`](Self::update) and [`delete`](Self::delete) recover locally: the
///   failure is logged and a sentinel (`None` / `false`) is returned.
pub struct ResourceClient<T: ApiEntity> {
    base_url: String,
    transport: Arc<dyn Transport>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: ApiEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
            _entity: PhantomData,
        }
    }
}

impl<T: ApiEntity> ResourceClient<T> {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            _entity: PhantomData,
        }
    }

    /// The collection URL this client is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single item in the collection.
    pub fn item_url(&self, id: T::Id) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub async fn fetch_all(&self) -> Result<Vec<T>, ClientError> {
        let request = ResourceRequest::List { url: self.base_url.clone() };
        let body = self.transport.send(request).await?;
        let items: Vec<T> = serde_json::from_value(body)?;
        debug!(collection = T::COLLECTION, count = items.len(), "Fetched");
        Ok(items)
    }

    pub async fn create(&self, item: &T) -> Result<T, ClientError> {
        let request = ResourceRequest::Create {
            url: self.base_url.clone(),
            body: serde_json::to_value(item)?,
        };
        let body = self.transport.send(request).await?;
        let created: T = serde_json::from_value(body)?;
        info!(collection = T::COLLECTION, id = %created.id(), "Created");
        Ok(created)
    }

    /// Replaces the item at `{base}/{id}`; `None` when the call failed.
    pub async fn update(&self, id: T::Id, item: &T) -> Option<T> {
        match self.try_update(id, item).await {
            Ok(updated) => {
                info!(collection = T::COLLECTION, %id, "Updated");
                Some(updated)
            }
            Err(e) => {
                error!(collection = T::COLLECTION, %id, error = %e, "Error in updating by ID");
                None
            }
        }
    }

    /// Removes the item at `{base}/{id}`; `false` when the call failed.
    pub async fn delete(&self, id: T::Id) -> bool {
        let request = ResourceRequest::Delete { url: self.item_url(id) };
        match self.transport.send(request).await {
            Ok(_) => {
                info!(collection = T::COLLECTION, %id, "Deleted");
                true
            }
            Err(e) => {
                error!(collection = T::COLLECTION, %id, error = %e, "Error in deleting by ID");
                false
            }
        }
    }

    async fn try_update(&self, id: T::Id, item: &T) -> Result<T, ClientError> {
        let request = ResourceRequest::Update {
            url: self.item_url(id),
            body: serde_json::to_value(item)?,
        };
        let body = self.transport.send(request).await?;
        Ok(serde_json::from_value(body)?)
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

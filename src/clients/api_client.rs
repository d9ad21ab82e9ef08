use crate::framework::{ApiEntity, ClientError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// Listing maps failures into the resource's own error type. Update and delete
/// pass through the sentinel results of [`ResourceClient`], which have already
/// logged whatever went wrong.
#[async_trait]
pub trait ApiClient<T: ApiEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: ClientError) -> Self::Error;

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn fetch_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().fetch_all().await.map_err(Self::map_error)
    }

    /// Replace an entity by ID. `None` when the call failed.
    #[tracing::instrument(skip(self, item), fields(collection = T::COLLECTION))]
    async fn update(&self, id: T::Id, item: T) -> Option<T> {
        tracing::debug!("Sending request");
        self.inner().update(id, &item).await
    }

    /// Delete an entity by ID. `false` when the call failed.
    #[tracing::instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn delete(&self, id: T::Id) -> bool {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}

use crate::clients::api_client::ApiClient;
use crate::framework::{ClientError, ResourceClient};
use crate::model::Product;
use crate::product_resource::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the product collection.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Submits a new product and returns the store's copy (with its assigned id).
    #[instrument(skip(self, product), fields(title = %product.title))]
    pub async fn create_product(&self, product: Product) -> Result<Product, ProductError> {
        debug!(?product, "create_product called");
        self.inner.create(&product).await.map_err(ProductError::Api)
    }

    /// Looks `id` up in an already fetched catalogue.
    pub fn find_in(products: &[Product], id: u64) -> Result<&Product, ProductError> {
        products
            .iter()
            .find(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))
    }
}

#[async_trait]
impl ApiClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: ClientError) -> Self::Error {
        ProductError::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    const URL: &str = "https://store.test/products";

    #[tokio::test]
    async fn test_create_product_returns_store_copy() {
        let mock = Arc::new(MockTransport::new());
        mock.expect_create(URL).return_ok(json!({
            "id": 21,
            "title": "New Product",
            "price": 29.99,
            "description": "A new product for testing",
            "category": "test-category",
            "image": "https://via.placeholder.com/150"
        }));

        let client = crate::product_resource::new(URL, mock.clone());
        let created = client.create_product(Product::demo_new()).await.unwrap();
        assert_eq!(created.id, 21);

        let sent = mock.requests();
        assert_eq!(sent[0].body().unwrap()["title"], "New Product");
        mock.verify();
    }

    #[tokio::test]
    async fn test_fetch_all_maps_errors() {
        let mock = Arc::new(MockTransport::new());
        mock.expect_list(URL).return_err(ClientError::Transport("refused".into()));

        let client = crate::product_resource::new(URL, mock.clone());
        let result = client.fetch_all().await;
        assert_eq!(
            result,
            Err(ProductError::Api(ClientError::Transport("refused".into())))
        );
    }

    #[test]
    fn test_find_in_catalogue() {
        let catalogue = vec![Product::new(1, "A", 1.0), Product::new(2, "B", 2.0)];
        assert_eq!(ProductClient::find_in(&catalogue, 2).unwrap().title, "B");
        assert_eq!(ProductClient::find_in(&catalogue, 9), Err(ProductError::NotFound(9)));
    }
}

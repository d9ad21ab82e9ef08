use serde::{Deserialize, Serialize};

/// Represents a product in the store catalogue.
///
/// The store assigns `id` on creation; payloads sent for create and update
/// carry a placeholder id of `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// Image used by the demo payloads.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Store identifier (`0` for payloads not yet stored)
    /// * `title` - Display title
    /// * `price` - Unit price
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Fixed payload submitted by the "add product" menu action.
    pub fn demo_new() -> Self {
        Self::new(0, "New Product", 29.99)
            .with_description("A new product for testing")
            .with_category("test-category")
    }

    /// Fixed replacement submitted by the "update product" menu action.
    pub fn demo_update() -> Self {
        Self::new(0, "Updated Product", 39.99)
            .with_description("An updated product for testing")
            .with_category("updated-category")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_decodes_store_shape() {
        let value = json!({
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        });
        let product: Product = serde_json::from_value(value).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, 109.95);
        assert_eq!(product.category, "men's clothing");
    }

    #[test]
    fn test_demo_payloads() {
        let created = Product::demo_new();
        assert_eq!(created.id, 0);
        assert_eq!(created.title, "New Product");
        assert_eq!(created.image, PLACEHOLDER_IMAGE);

        let updated = Product::demo_update();
        assert_eq!(updated.price, 39.99);
        assert_eq!(updated.category, "updated-category");
    }
}

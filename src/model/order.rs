use super::Product;
use serde::Serialize;
use std::fmt;

/// A product selected into the cart together with how many units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Snapshot of a cart at checkout time.
///
/// Immutable once built: the fields are only readable, and `total` is always
/// the sum of the item subtotals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    items: Vec<CartItem>,
    total: f64,
}

impl Order {
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(CartItem::subtotal).sum();
        Self { items, total }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// One-line summary, e.g. `2x Backpack, 1x Jacket (total 275.89)`.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self
            .items
            .iter()
            .map(|i| format!("{}x {}", i.quantity, i.product.title))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} (total {:.2})", summary, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_and_summary() {
        let order = Order::from_items(vec![
            CartItem::new(Product::new(1, "Backpack", 10.0), 2),
            CartItem::new(Product::new(2, "Jacket", 2.5), 3),
        ]);
        assert_eq!(order.total(), 27.5);
        assert_eq!(order.to_string(), "2x Backpack, 3x Jacket (total 27.50)");
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::from_items(Vec::new());
        assert_eq!(order.total(), 0.0);
        assert!(order.items().is_empty());
    }
}

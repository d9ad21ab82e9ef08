//! In-memory shopping cart and checkout.
//!
//! The cart is owned by whoever drives the session (the
//! [`Dispatcher`](crate::lifecycle::Dispatcher)); nothing else holds a
//! reference to it.

use crate::model::{CartItem, Order, Product};
use tracing::info;

/// Accumulates products keyed by product id.
///
/// Holds at most one [`CartItem`] per distinct `product.id`, in first-added order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product` and returns the confirmation line.
    ///
    /// If the product is already in the cart its quantity is increased, otherwise
    /// a new item is appended. The quantity is not validated here; a zero quantity
    /// still creates the entry.
    pub fn add(&mut self, product: Product, quantity: u32) -> String {
        let message = format!("{} of {} added to cart.", quantity, product.title);
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem::new(product, quantity));
        }
        info!(items = self.items.len(), "{}", message);
        message
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds an [`Order`] from the current contents. The cart is left as is, so
    /// repeated calls on an unchanged cart yield equal orders.
    pub fn checkout(&self) -> Order {
        let order = Order::from_items(self.items.clone());
        info!(items = order.items().len(), total = order.total(), "Checkout");
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn product(id: u64, price: f64) -> Product {
        Product::new(id, format!("Product {id}"), price)
    }

    #[test]
    fn test_repeated_add_merges_quantity() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), 2);
        let message = cart.add(product(1, 10.0), 3);

        assert_eq!(message, "3 of Product 1 added to cart.");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.checkout().total(), 50.0);
    }

    #[test]
    fn test_checkout_leaves_cart_untouched() {
        let mut cart = Cart::new();
        cart.add(product(1, 1.5), 2);
        cart.add(product(2, 4.0), 1);

        let first = cart.checkout();
        let second = cart.checkout();
        assert_eq!(first, second);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_empty_cart_checks_out_to_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.checkout().total(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_one_entry_per_product_with_summed_quantity(
            adds in prop::collection::vec((0u64..6, 1u32..50), 0..40)
        ) {
            let mut cart = Cart::new();
            let mut expected: HashMap<u64, u32> = HashMap::new();
            for (id, qty) in &adds {
                cart.add(product(*id, 2.0), *qty);
                *expected.entry(*id).or_default() += qty;
            }

            prop_assert_eq!(cart.items().len(), expected.len());
            for item in cart.items() {
                prop_assert_eq!(Some(&item.quantity), expected.get(&item.product.id));
            }
        }

        #[test]
        fn prop_total_is_sum_of_price_times_quantity(
            adds in prop::collection::vec((0u64..6, 1u32..20), 0..30)
        ) {
            let mut cart = Cart::new();
            for (id, qty) in &adds {
                // price derived from the id so merged entries agree on price
                cart.add(product(*id, (*id as f64) * 1.25 + 0.5), *qty);
            }

            let expected: f64 = cart
                .items()
                .iter()
                .map(|i| i.product.price * f64::from(i.quantity))
                .sum();
            let order = cart.checkout();
            prop_assert!((order.total() - expected).abs() < 1e-9);
            prop_assert_eq!(order, cart.checkout());
        }
    }
}

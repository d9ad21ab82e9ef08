//! Single-shot menu dispatcher.
//!
//! [`Dispatcher::run`] consumes the dispatcher: it asks for one menu choice,
//! performs that one action, and hands back a [`SessionReport`]. There is no way
//! to loop back to the menu with the same dispatcher.

use crate::cart::Cart;
use crate::clients::{ApiClient, ProductClient, UserClient};
use crate::lifecycle::console::Console;
use crate::model::{Order, Product, User};
use serde::Serialize;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, error, info, warn};

/// Product targeted by the update and delete menu actions.
pub const DEMO_PRODUCT_ID: u64 = 1;

/// The operations reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewUsers,
    AddProduct,
    UpdateProduct,
    DeleteProduct,
    ViewProductsAndShop,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewUsers => "View All Users",
            MenuAction::AddProduct => "Add New Product",
            MenuAction::UpdateProduct => "Update Product",
            MenuAction::DeleteProduct => "Delete Product",
            MenuAction::ViewProductsAndShop => "View All The Products",
        }
    }
}

/// Numbering of the menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MenuLayout {
    /// 1 users, 2 add, 3 update, 4 delete, 5 products and shop.
    #[default]
    UsersFirst,
    /// 1 products and shop, 2 users, 3 add, 4 update, 5 delete.
    ShopFirst,
}

impl MenuLayout {
    /// Menu entries in display order; entry `n` is selected by typing `n + 1`.
    pub fn entries(self) -> [MenuAction; 5] {
        use MenuAction::*;
        match self {
            MenuLayout::UsersFirst => [
                ViewUsers,
                AddProduct,
                UpdateProduct,
                DeleteProduct,
                ViewProductsAndShop,
            ],
            MenuLayout::ShopFirst => [
                ViewProductsAndShop,
                ViewUsers,
                AddProduct,
                UpdateProduct,
                DeleteProduct,
            ],
        }
    }

    pub fn prompt(self) -> String {
        let mut prompt = String::from("Please select an option\n");
        for (n, action) in self.entries().iter().enumerate() {
            prompt.push_str(&format!("{}: {}\n", n + 1, action.label()));
        }
        prompt
    }

    /// Maps the typed answer to an action; `None` for anything unrecognized.
    /// Only the exact entry numbers match; `01` or `+1` do not.
    pub fn parse(self, input: &str) -> Option<MenuAction> {
        let input = input.trim();
        self.entries()
            .into_iter()
            .enumerate()
            .find(|(n, _)| (n + 1).to_string() == input)
            .map(|(_, action)| action)
    }
}

/// Errors that end a session early. Remote failures never do; they are
/// logged and replaced by fallbacks.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// What a finished session did.
#[derive(Debug)]
pub struct SessionReport<W> {
    /// The selected action, `None` if the input was not a menu entry.
    pub action: Option<MenuAction>,
    /// Cart contents at the end of the session.
    pub cart: Cart,
    /// The order, if the user checked out.
    pub order: Option<Order>,
    /// The console writer, holding whatever was printed.
    pub output: W,
}

/// Routes one menu choice to the store clients and owns the session's cart.
pub struct Dispatcher<R, W> {
    products: ProductClient,
    users: UserClient,
    layout: MenuLayout,
    cart: Cart,
    console: Console<R, W>,
}

impl<R, W> Dispatcher<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        products: ProductClient,
        users: UserClient,
        layout: MenuLayout,
        console: Console<R, W>,
    ) -> Self {
        Self {
            products,
            users,
            layout,
            cart: Cart::new(),
            console,
        }
    }

    /// Runs exactly one menu action and ends the session.
    pub async fn run(mut self) -> Result<SessionReport<W>, DispatchError> {
        let answer = self.console.ask(&self.layout.prompt()).await?;
        let action = self.layout.parse(&answer);
        debug!(?action, layout = ?self.layout, "Menu selection");

        let mut order = None;
        match action {
            Some(MenuAction::ViewUsers) => {
                let users = self.load_users().await;
                self.show(None, &users).await?;
            }
            Some(MenuAction::AddProduct) => {
                let added = self.create_product(Product::demo_new()).await;
                self.show(Some("Product added:"), &added).await?;
            }
            Some(MenuAction::UpdateProduct) => {
                let updated = self
                    .products
                    .update(DEMO_PRODUCT_ID, Product::demo_update())
                    .await;
                self.show(Some("Product updated:"), &updated).await?;
            }
            Some(MenuAction::DeleteProduct) => {
                let deleted = self.products.delete(DEMO_PRODUCT_ID).await;
                self.console
                    .say(if deleted {
                        "Product deleted successfully."
                    } else {
                        "Error deleting product."
                    })
                    .await?;
            }
            Some(MenuAction::ViewProductsAndShop) => {
                order = self.shop().await?;
            }
            None => {
                warn!(input = %answer, "Invalid menu selection");
                self.console.say("Invalid Input").await?;
            }
        }

        Ok(SessionReport {
            action,
            cart: self.cart,
            order,
            output: self.console.into_writer(),
        })
    }

    /// Browse, pick one product, add it, optionally check out.
    async fn shop(&mut self) -> Result<Option<Order>, DispatchError> {
        let products = self.load_products().await;
        self.show(None, &products).await?;

        let answer = self.console.ask("Enter product ID to add to cart: ").await?;
        let selected = match answer.trim().parse::<u64>() {
            Ok(id) => match ProductClient::find_in(&products, id) {
                Ok(product) => Some(product.clone()),
                Err(e) => {
                    warn!(error = %e, "Selection not in catalogue");
                    None
                }
            },
            Err(_) => {
                warn!(input = %answer, "Selection is not a product id");
                None
            }
        };
        let Some(product) = selected else {
            self.console.say("Product not found.").await?;
            return Ok(None);
        };

        let answer = self.console.ask("Enter quantity: ").await?;
        let Some(quantity) = parse_quantity(&answer) else {
            warn!(input = %answer, "Rejected quantity");
            self.console.say("Invalid quantity.").await?;
            return Ok(None);
        };
        let confirmation = self.cart.add(product, quantity);
        self.console.say(&confirmation).await?;

        let answer = self
            .console
            .ask("Do you want to checkout? (yes/no): ")
            .await?;
        if !answer.trim().eq_ignore_ascii_case("yes") {
            return Ok(None);
        }

        let order = self.cart.checkout();
        info!(%order, "Order processed");
        self.show(Some("Order processed:"), &order).await?;
        Ok(Some(order))
    }

    async fn load_products(&self) -> Vec<Product> {
        self.products.fetch_all().await.unwrap_or_else(|e| {
            error!(error = %e, "Error fetching products");
            Vec::new()
        })
    }

    async fn load_users(&self) -> Vec<User> {
        self.users.fetch_all().await.unwrap_or_else(|e| {
            error!(error = %e, "Error fetching users");
            Vec::new()
        })
    }

    async fn create_product(&self, product: Product) -> Option<Product> {
        match self.products.create_product(product).await {
            Ok(created) => Some(created),
            Err(e) => {
                error!(error = %e, "Error adding product");
                None
            }
        }
    }

    /// Prints `value` as pretty JSON, optionally prefixed by `label`.
    async fn show<T: Serialize>(
        &mut self,
        label: Option<&str>,
        value: &T,
    ) -> Result<(), DispatchError> {
        let json = serde_json::to_string_pretty(value)?;
        let line = match label {
            Some(label) => format!("{label} {json}"),
            None => json,
        };
        self.console.say(&line).await?;
        Ok(())
    }
}

/// A positive whole number of units.
fn parse_quantity(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|q| *q > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_number_the_same_actions_differently() {
        assert_eq!(MenuLayout::UsersFirst.parse("1"), Some(MenuAction::ViewUsers));
        assert_eq!(MenuLayout::UsersFirst.parse("5"), Some(MenuAction::ViewProductsAndShop));
        assert_eq!(MenuLayout::ShopFirst.parse("1"), Some(MenuAction::ViewProductsAndShop));
        assert_eq!(MenuLayout::ShopFirst.parse(" 5 "), Some(MenuAction::DeleteProduct));
    }

    #[test]
    fn test_unrecognized_choices() {
        for input in ["0", "6", "9", "", "abc", "-1", "1.0", "+1", "01", "005"] {
            assert_eq!(MenuLayout::UsersFirst.parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn test_prompt_lists_entries() {
        let prompt = MenuLayout::UsersFirst.prompt();
        assert!(prompt.starts_with("Please select an option\n1: View All Users\n"));
        assert!(prompt.ends_with("5: View All The Products\n"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3\n"), Some(3));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-2"), None);
        assert_eq!(parse_quantity("lots"), None);
    }
}

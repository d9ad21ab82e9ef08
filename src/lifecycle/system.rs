use crate::clients::{ProductClient, UserClient};
use crate::config::ShopConfig;
use crate::framework::{HttpTransport, Transport};
use crate::lifecycle::console::Console;
use crate::lifecycle::dispatcher::{Dispatcher, MenuLayout};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

/// Wires the store clients from configuration.
///
/// `ShopSystem` is responsible for:
/// - **Transport**: one shared [`Transport`] for every resource client
/// - **Collection URLs**: derived from the configured API root
/// - **Sessions**: handing the clients to a fresh [`Dispatcher`]
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::connect(&config);
/// let console = Console::new(BufReader::new(stdin()), stdout());
/// system.dispatcher(console).run().await?;
/// ```
pub struct ShopSystem {
    /// Client for the product collection
    pub product_client: ProductClient,

    /// Client for the user collection
    pub user_client: UserClient,

    layout: MenuLayout,
}

impl ShopSystem {
    /// Builds the clients over the given transport.
    pub fn new(config: &ShopConfig, transport: Arc<dyn Transport>) -> Self {
        let products_url = config.products_url();
        let users_url = config.users_url();
        info!(%products_url, %users_url, "Clients configured");

        Self {
            product_client: crate::product_resource::new(products_url, transport.clone()),
            user_client: crate::user_resource::new(users_url, transport),
            layout: config.menu_layout,
        }
    }

    /// Builds the clients over real HTTP.
    pub fn connect(config: &ShopConfig) -> Self {
        Self::new(config, Arc::new(HttpTransport::new()))
    }

    /// Starts a session on `console`. The dispatcher owns its own, empty cart.
    pub fn dispatcher<R, W>(&self, console: Console<R, W>) -> Dispatcher<R, W>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        Dispatcher::new(
            self.product_client.clone(),
            self.user_client.clone(),
            self.layout,
            console,
        )
    }
}

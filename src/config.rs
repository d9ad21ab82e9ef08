//! Command-line and environment configuration.
//!
//! Every setting has a default matching the public demo store, so running the
//! binary with no flags and no environment works out of the box. A `.env` file
//! in the working directory is honoured (see `main`).

use crate::framework::ApiEntity;
use crate::lifecycle::MenuLayout;
use crate::model::{Product, User};
use clap::Parser;
use thiserror::Error;
use url::Url;

/// Root of the public demo store API.
pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";

/// Command-line flags. All of them are optional overrides; with none given
/// the client talks to [`DEFAULT_API_BASE_URL`] with the users-first menu.
#[derive(Debug, Parser)]
#[command(name = "shop-client")]
#[command(version, about = "Interactive demo client for a fake store REST API")]
pub struct Cli {
    /// Root URL of the store API
    #[arg(long, env = "SHOP_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Menu numbering
    #[arg(long, env = "SHOP_MENU_LAYOUT", value_enum, default_value_t = MenuLayout::UsersFirst)]
    pub menu: MenuLayout,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API base URL {0:?}: {1}")]
    InvalidUrl(String, String),

    #[error("Unsupported URL scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),
}

/// Validated settings for a session.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    pub api_base_url: Url,
    pub menu_layout: MenuLayout,
}

impl ShopConfig {
    pub fn new(api_base_url: &str, menu_layout: MenuLayout) -> Result<Self, ConfigError> {
        let url = Url::parse(api_base_url)
            .map_err(|e| ConfigError::InvalidUrl(api_base_url.to_string(), e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(Self {
            api_base_url: url,
            menu_layout,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::new(&cli.api_base_url, cli.menu)
    }

    /// `{root}/{collection}`.
    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.api_base_url.as_str().trim_end_matches('/'), collection)
    }

    pub fn products_url(&self) -> String {
        self.collection_url(Product::COLLECTION)
    }

    pub fn users_url(&self) -> String {
        self.collection_url(User::COLLECTION)
    }
}

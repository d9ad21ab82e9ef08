//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod api_client;
pub mod product_client;
pub mod user_client;

pub use api_client::*;
pub use product_client::*;
pub use user_client::*;

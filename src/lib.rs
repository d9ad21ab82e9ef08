//! # Shop Client
//!
//! > **An interactive demo client for a collection-style store REST API.**
//!
//! The crate lists users and products, creates, updates and deletes a demo
//! product, and runs a small in-memory cart with checkout, all driven from a
//! one-shot console menu.
//!
//! ## Architecture Notes
//!
//! ### 1. One generic client
//! [`ResourceClient<T>`](framework::ResourceClient) is written once and bound to
//! a collection URL per entity type. Entities only implement
//! [`ApiEntity`](framework::ApiEntity).
//!
//! ### 2. Two error policies
//! Listing and creating return `Result` and let the caller decide. Updating and
//! deleting log the failure and return a sentinel (`None` / `false`). The
//! dispatcher turns listing failures into empty lists, so no remote failure ever
//! ends the process.
//!
//! ### 3. Transport seam
//! All I/O goes through the [`Transport`](framework::Transport) trait:
//! [`HttpTransport`](framework::HttpTransport) in production,
//! [`MockTransport`](framework::mock::MockTransport) in tests.
//!
//! ### 4. Observability
//! `tracing` everywhere, written to stderr. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic client, transport and errors.
//! - [`model`]: `Product`, `User`, `CartItem`, `Order`.
//! - [`clients`]: per-resource wrappers with their own error types.
//! - [`product_resource`], [`user_resource`]: entity bindings and factories.
//! - [`cart`]: the cart/checkout aggregator.
//! - [`lifecycle`]: wiring, console and the menu dispatcher.
//! - [`config`]: CLI flags and environment.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run -- --menu shop-first
//! ```

pub mod cart;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_resource;
pub mod user_resource;

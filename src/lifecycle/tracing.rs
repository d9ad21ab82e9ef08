//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter on
//! **stderr**. Stdout belongs to the interactive menu, so log lines never mix
//! with prompts.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG`; without it only warnings and errors are
//! shown, which is where failed remote calls are reported.
//!
//! ```bash
//! # Request flow (verb, URL, status) for every call
//! RUST_LOG=debug shop-client
//!
//! # Only the HTTP layer
//! RUST_LOG=shop_client::framework=debug shop-client
//! ```
//!
//! ## What Gets Traced
//!
//! - **Remote calls**: one span per request with `verb` and `url` fields
//! - **Recovered failures**: `update`/`delete` errors at `error` level with the id
//! - **Listing fallbacks**: fetch failures replaced by an empty list
//! - **Cart**: additions and checkout totals at `info`

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

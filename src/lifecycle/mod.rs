//! Session orchestration: client wiring, console prompting and the menu.

pub mod console;
pub mod dispatcher;
pub mod system;
pub mod tracing;

pub use console::Console;
pub use dispatcher::*;
pub use system::ShopSystem;

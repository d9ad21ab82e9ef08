//! Pure data structures (DTOs) exchanged with the store API.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

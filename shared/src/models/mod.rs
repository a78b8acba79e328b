//! Data models
//!
//! Shared between the core crate, the CLI driver and the browser binding.
//! Prices are whole rupees (`i64`).

pub mod cart;
pub mod menu;
pub mod reservation;

// Re-exports
pub use cart::*;
pub use menu::*;
pub use reservation::*;

//! Shared types for the Mom's Kitchen storefront
//!
//! Common types used by the core crate, the CLI driver and the browser
//! binding: catalog and cart models, reservation records, the error system
//! and small utilities.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
pub use types::{Price, Timestamp};

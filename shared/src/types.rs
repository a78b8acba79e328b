//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Currency amount in whole rupees
pub type Price = i64;

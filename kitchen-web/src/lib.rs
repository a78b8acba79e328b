//! Browser binding for the Mom's Kitchen page.
//!
//! This crate is a stub by default so the workspace builds and tests on
//! native targets without a wasm toolchain. Enable the real binding with
//! `--features web` on a wasm32 target.
//!
//! [`page`] holds the DOM contract (ids, data attributes, command encoding)
//! and is compiled everywhere.

pub mod page;

/// No-op on non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn start() {
    tracing::debug!("kitchen-web built without the `web` feature; nothing to start");
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;

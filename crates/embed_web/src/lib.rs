//! Browser adapter: runs the embed shim against the live window and document.
//!
//! Everything here is wasm32-only; on other targets this crate is empty.

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::start;

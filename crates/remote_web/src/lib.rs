#![forbid(unsafe_code)]

//! Browser binding for the remote forwarder.
//!
//! Loaded into the popped-out window, [`start`] reaches the presentation
//! through `window.opener.impress()` and forwards this window's keyboard,
//! click and touch input to it.

// The full implementation is only meaningful on wasm32.
#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod document;
#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
mod navigator;

#[cfg(target_arch = "wasm32")]
pub use document::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use listeners::{install, start};
#[cfg(target_arch = "wasm32")]
pub use navigator::{JsNavigator, acquire_api};

/// Name of the factory the opener window exposes.
pub const API_FACTORY: &str = "impress";

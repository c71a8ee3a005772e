//! # input_core
//!
//! UI-agnostic remote-control layer: turns raw input in a secondary
//! (popped-out) window into navigation calls on a presentation engine that
//! lives somewhere else.
//!
//! This crate provides:
//! - [`NavigationApi`]: the `next`/`prev`/`goto` capability, injected by the host
//! - [`DocumentTree`]: the structural DOM queries the click handlers need
//! - [`RemoteForwarder`]: the five input listeners and their dispatch order
//! - [`RemoteConfig`]: key bindings, tap band width, and step class markers
//!
//! ## Design Principles
//!
//! The crate does not depend on any windowing system or on a browser. It
//! never looks up the engine itself and never mutates host events: handlers
//! return an [`EventOutcome`] that the host applies.
//!
//! ## Integration
//!
//! A host acquires the API (failing with [`SetupError`] if it cannot), wraps
//! its document in a [`DocumentTree`], and feeds events:
//! ```ignore
//! let forwarder = RemoteForwarder::new(api, document, RemoteConfig::default());
//! let outcome = forwarder.dispatch(&InputEvent::KeyUp(core_types::KEY_RIGHT));
//! if outcome.prevent_default {
//!     event.prevent_default();
//! }
//! ```

mod api;
mod config;
mod error;
mod forwarder;
mod touch;
mod tree;

pub use api::{NavAction, NavigationApi};
pub use config::{ConfigError, RemoteConfig};
pub use error::SetupError;
pub use forwarder::{InputEvent, Listener, RemoteForwarder};
pub use touch::touch_zone;
pub use tree::{DocumentTree, closest};

pub use core_types::{EventOutcome, KeyCode, TouchStart, TouchZone};

//! kalend-ui is a headless, declarative component runtime.
//!
//! Components are plain functions wrapped in [`component`]. While a
//! [`Host`] runs a build pass they remember per-instance state, read ambient
//! context and emit a tree of [`Node`]s carrying classes, accessibility
//! attributes and event handlers. The host then dispatches clicks and
//! selections back into those handlers.
//!
//! # Components
//!
//! ```
//! use kalend_ui::{Host, Node, component, leaf};
//!
//! fn greeting(name: &str) {
//!     component("greeting", || {
//!         leaf(Node::inline(format!("Hello, {name}")));
//!     });
//! }
//!
//! let mut host = Host::new(|| greeting("kalend"));
//! assert_eq!(host.render().text_content(), "Hello, kalend");
//! ```
//!
//! # Memoized State
//!
//! [`remember`] and [`remember_with_key`] create state that persists across
//! build passes within one component instance. State that is not remembered
//! again during a pass is dropped when the pass ends.
//!
//! Memoized state is only available during a build pass; calling `remember`
//! from an event handler panics.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod class;
pub mod context;
pub mod error;
pub mod host;
pub mod node;
pub mod prop;
pub mod runtime;

pub use crate::{
    class::ClassList,
    context::{provide_context, use_context},
    error::DispatchError,
    host::{Host, NodeQuery},
    node::{ElementKind, Node, Role, SelectOption, element, leaf},
    prop::{Callback, CallbackWith},
    runtime::{State, component, key, remember, remember_with_key},
};

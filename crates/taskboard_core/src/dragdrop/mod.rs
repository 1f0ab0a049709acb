//! Drag-and-drop interaction layer.
//!
//! # Responsibility
//! - Define the element capabilities the broker consumes.
//! - Route drag signals to element and ambient handlers.
//! - Track one drag session and dispatch typed drops.
//!
//! # Invariants
//! - Signals are processed one at a time; a handler never interleaves with
//!   another handler.
//! - Visual tags are the only side effect on elements.

pub mod broker;
pub mod element;
pub mod surface;

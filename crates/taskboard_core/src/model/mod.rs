//! Domain model for board entities.
//!
//! # Responsibility
//! - Define the entity capability consumed by the generic store.
//! - Define the project record tracked by the board.
//!
//! # Invariants
//! - Entity identity is derived from content, never assigned by a store.
//! - A value that fails `validate()` never enters a store.

pub mod entity;
pub mod project;

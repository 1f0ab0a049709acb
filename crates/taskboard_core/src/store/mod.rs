//! In-memory entity stores.
//!
//! # Responsibility
//! - Keep validated entities in insertion order.
//! - Fan out insert/update notifications to registered observers.
//!
//! # Invariants
//! - Store writes must call `Entity::validate()` before mutating contents.
//! - Ids are unique at all times.
//! - Store APIs return semantic errors (`DuplicateId`, `NotFound`) in
//!   addition to entity validation errors.

pub mod entity_store;

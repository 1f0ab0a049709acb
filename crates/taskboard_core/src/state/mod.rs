//! Single-slot observable state primitives.
//!
//! # Responsibility
//! - Hold one optional value and notify listeners on change.
//!
//! # Invariants
//! - Notification happens only when the held value actually changes.

pub mod property;

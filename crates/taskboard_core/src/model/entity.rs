//! Entity capability contract.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Comparable field projection used by store queries.
///
/// Equality is plain value equality; no deep/structural matching.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// Capability required from every value managed by `EntityStore`.
pub trait Entity: Clone {
    /// Closed set of queryable fields.
    type Field: Copy + Eq + Debug;
    /// Error reported when the entity violates its own invariants.
    type ValidationError: Error + 'static;

    /// Checks entity invariants.
    fn validate(&self) -> Result<(), Self::ValidationError>;

    /// Stable identity derived from content.
    fn id(&self) -> String;

    /// Projects one field for query filtering.
    fn field_value(&self, field: Self::Field) -> FieldValue;
}

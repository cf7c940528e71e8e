//! Record error types.

use std::fmt;

/// The kind of mutation that was attempted on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// `record[key] = value`
    SetItem,
    /// `record.key = value`
    SetAttr,
    /// `del record[key]`
    DelItem,
    /// `del record.key`
    DelAttr,
}

impl Mutation {
    /// Returns a short description of the mutation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mutation::SetItem => "set item",
            Mutation::SetAttr => "set attribute",
            Mutation::DelItem => "delete item",
            Mutation::DelAttr => "delete attribute",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors returned by [`crate::Record`] operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// A write or delete was attempted; records never change after construction.
    #[error("record is immutable: cannot {operation} '{field}'")]
    ImmutabilityViolation { operation: Mutation, field: String },

    /// Attribute-style lookup of a field the record does not have.
    #[error("record has no field '{0}'")]
    NoSuchField(String),

    /// Conversion from a JSON value that is not an object.
    #[error("records are built from JSON objects, got {0}")]
    NotAMapping(&'static str),
}

impl RecordError {
    /// True for any rejected mutation
    pub fn is_immutability_violation(&self) -> bool {
        matches!(self, RecordError::ImmutabilityViolation { .. })
    }
}

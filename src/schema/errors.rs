//! Schema error types
//!
//! Error codes:
//! - TUPLE_FIELD_COUNT_MISMATCH (INVALID_ARGUMENT)
//! - TUPLE_FIELD_INDEX_OUT_OF_RANGE (NOT_FOUND)
//! - TUPLE_UNKNOWN_FIELD_NAME (NOT_FOUND)
//!
//! All failures propagate synchronously to the caller; no operation leaves a
//! schema partially constructed or mutated.

use std::fmt;

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Classification of a schema error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller passed structurally invalid input to construction
    InvalidArgument,
    /// Lookup target does not exist in the schema
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            ErrorKind::NotFound => write!(f, "NOT_FOUND"),
        }
    }
}

/// Errors produced by schema construction and field lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Type and name lists passed to construction differ in length
    #[error("field count mismatch: {types} types but {names} names")]
    FieldCountMismatch {
        /// Number of types supplied
        types: usize,
        /// Number of names supplied
        names: usize,
    },

    /// Positional accessor given an index outside the schema
    #[error("field index {index} out of range for schema with {num_fields} fields")]
    FieldIndexOutOfRange {
        /// The offending index
        index: usize,
        /// Field count of the schema that rejected it
        num_fields: usize,
    },

    /// Name lookup found no matching field
    #[error("no field named '{0}' in schema")]
    UnknownFieldName(String),
}

impl SchemaError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::FieldCountMismatch { .. } => "TUPLE_FIELD_COUNT_MISMATCH",
            SchemaError::FieldIndexOutOfRange { .. } => "TUPLE_FIELD_INDEX_OUT_OF_RANGE",
            SchemaError::UnknownFieldName(_) => "TUPLE_UNKNOWN_FIELD_NAME",
        }
    }

    /// Returns the classification for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchemaError::FieldCountMismatch { .. } => ErrorKind::InvalidArgument,
            SchemaError::FieldIndexOutOfRange { .. } => ErrorKind::NotFound,
            SchemaError::UnknownFieldName(_) => ErrorKind::NotFound,
        }
    }
}

//! Field storage types
//!
//! Every type occupies a fixed number of bytes in a tuple; the schema layer
//! does not support variable-length fields. Text values live in a fixed-width
//! slot: a 4-byte length prefix followed by `TEXT_LEN` payload bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payload capacity of a `Text` field slot, in bytes.
pub const TEXT_LEN: usize = 128;

/// Storage type of a single tuple field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
    /// Fixed-width UTF-8 text slot
    Text,
}

impl FieldType {
    /// Number of bytes a value of this type occupies in a tuple.
    ///
    /// Fixed per type, which is what makes the byte size of a whole tuple a
    /// pure function of its schema.
    pub fn byte_len(&self) -> usize {
        match self {
            FieldType::Int => 8,
            FieldType::Float => 8,
            FieldType::Bool => 1,
            FieldType::Text => 4 + TEXT_LEN,
        }
    }

    /// Stable upper-case name used in schema rendering and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Int => "INT",
            FieldType::Float => "FLOAT",
            FieldType::Bool => "BOOL",
            FieldType::Text => "TEXT",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_lens_are_fixed() {
        assert_eq!(FieldType::Int.byte_len(), 8);
        assert_eq!(FieldType::Float.byte_len(), 8);
        assert_eq!(FieldType::Bool.byte_len(), 1);
        assert_eq!(FieldType::Text.byte_len(), 4 + TEXT_LEN);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(FieldType::Int.to_string(), "INT");
        assert_eq!(FieldType::Float.to_string(), "FLOAT");
        assert_eq!(FieldType::Bool.to_string(), "BOOL");
        assert_eq!(FieldType::Text.to_string(), "TEXT");
    }
}

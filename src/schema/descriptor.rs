//! Tuple schema descriptors
//!
//! A `TupleSchema` fixes the byte layout of every tuple that conforms to it.
//! Consumers:
//!
//! - tuple storage computes slot offsets from `byte_size` and field widths
//! - the planner builds result schemas for joins via `merge`
//! - predicate and projection evaluation resolves names to positions with
//!   `index_for_field_name`
//!
//! Schemas are plain immutable values. Sharing references across threads is
//! safe without locking; copying (`Clone`) and `merge` allocate independent
//! instances and never touch their sources.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use super::types::FieldType;

/// One typed, optionally named component of a tuple.
///
/// An empty name denotes an anonymous field. Anonymous fields are ordinary
/// fields in every respect; the empty string is a valid lookup target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    field_type: FieldType,
    name: String,
}

impl Field {
    /// Create a named field
    pub fn new(field_type: FieldType, name: impl Into<String>) -> Self {
        Self {
            field_type,
            name: name.into(),
        }
    }

    /// Create an anonymous (unnamed) field
    pub fn anonymous(field_type: FieldType) -> Self {
        Self {
            field_type,
            name: String::new(),
        }
    }

    /// Returns the storage type of this field
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns the field name (empty for anonymous fields)
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.field_type, self.name)
    }
}

/// Ordered field layout of a tuple.
///
/// Insertion order is significant: it defines both positional indexing and
/// the on-disk field order. Field names need not be unique; name lookup
/// resolves to the first match. Equality and hashing are structural, so
/// schemas can key plan caches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupleSchema {
    fields: Vec<Field>,
}

impl TupleSchema {
    /// Create a schema from parallel type and name lists.
    ///
    /// Fails with [`SchemaError::FieldCountMismatch`] if the lists differ in
    /// length. The check is unconditional; mismatched inputs are a caller
    /// bug the engine must surface, not a debug-only assertion.
    pub fn from_types_and_names(
        types: impl IntoIterator<Item = FieldType>,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> SchemaResult<Self> {
        let types: Vec<FieldType> = types.into_iter().collect();
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if types.len() != names.len() {
            return Err(SchemaError::FieldCountMismatch {
                types: types.len(),
                names: names.len(),
            });
        }

        let fields = types
            .into_iter()
            .zip(names)
            .map(|(field_type, name)| Field { field_type, name })
            .collect();
        Ok(Self { fields })
    }

    /// Create a schema of anonymous fields from a type list
    pub fn from_types(types: impl IntoIterator<Item = FieldType>) -> Self {
        Self {
            fields: types.into_iter().map(Field::anonymous).collect(),
        }
    }

    /// Merge two schemas into one.
    ///
    /// The result carries `a`'s fields followed by `b`'s, in order, with
    /// `a.num_fields() + b.num_fields()` fields total. Neither operand is
    /// mutated. This is how the planner derives the output schema of a join.
    pub fn merge(a: &TupleSchema, b: &TupleSchema) -> TupleSchema {
        let mut fields = Vec::with_capacity(a.fields.len() + b.fields.len());
        fields.extend_from_slice(&a.fields);
        fields.extend_from_slice(&b.fields);
        TupleSchema { fields }
    }

    /// Returns the number of fields in this schema
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Returns the name of the field at position `i`.
    ///
    /// Fails with [`SchemaError::FieldIndexOutOfRange`] if `i` is not a
    /// valid position.
    pub fn field_name(&self, i: usize) -> SchemaResult<&str> {
        self.field(i).map(|f| f.name())
    }

    /// Returns the storage type of the field at position `i`.
    ///
    /// Fails with [`SchemaError::FieldIndexOutOfRange`] if `i` is not a
    /// valid position.
    pub fn field_type(&self, i: usize) -> SchemaResult<FieldType> {
        self.field(i).map(|f| f.field_type())
    }

    /// Returns the position of the first field named `name`.
    ///
    /// Comparison is exact and case-sensitive; the empty string matches
    /// anonymous fields. Fails with [`SchemaError::UnknownFieldName`] if no
    /// field matches.
    pub fn index_for_field_name(&self, name: &str) -> SchemaResult<usize> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| SchemaError::UnknownFieldName(name.to_string()))
    }

    /// Returns the byte size of tuples conforming to this schema.
    ///
    /// Every field width is fixed, so every tuple of a given schema has the
    /// same size.
    pub fn byte_size(&self) -> usize {
        self.fields.iter().map(|f| f.field_type.byte_len()).sum()
    }

    /// Iterate over the fields in definition order.
    ///
    /// Read-only; call again to restart. Internal storage stays private, so
    /// the immutability of the schema cannot be broken through iteration.
    pub fn fields(&self) -> slice::Iter<'_, Field> {
        self.fields.iter()
    }

    fn field(&self, i: usize) -> SchemaResult<&Field> {
        self.fields.get(i).ok_or(SchemaError::FieldIndexOutOfRange {
            index: i,
            num_fields: self.fields.len(),
        })
    }
}

impl fmt::Display for TupleSchema {
    /// Renders as `"INT(id), TEXT(name)"`: one `type(name)` entry per field,
    /// comma-separated, no trailing separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

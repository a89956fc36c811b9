//! Tuple schema subsystem for tupledb
//!
//! A schema is the ordered list of typed, optionally named fields that fixes
//! the byte layout of every tuple conforming to it.
//!
//! # Design Principles
//!
//! - Schemas are immutable values: no mutation API after construction
//! - All field widths are fixed; no variable-length fields at this layer
//! - Structural equality and hashing, so schemas can key plan caches
//! - Construction and lookup failures are explicit, never assertions

mod descriptor;
mod errors;
mod types;

pub use descriptor::{Field, TupleSchema};
pub use errors::{ErrorKind, SchemaError, SchemaResult};
pub use types::{FieldType, TEXT_LEN};

//! tupledb - tuple schema layer for a fixed-length relational storage engine
//!
//! Describes the ordered, typed field layout of tuples. Tuple value storage,
//! page layout and query operators live in the consuming engine.

pub mod schema;

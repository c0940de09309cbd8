//! Schema subsystem for tabula
//!
//! # Design Principles
//!
//! - Column names unique within a schema
//! - Structural equality, never identity
//! - Append-or-copy construction only; schemas are never mutated in place
//! - Exact sort membership: no nulls, no coercion

mod types;

pub use types::{Header, Schema, Sort, Value};

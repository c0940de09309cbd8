//! tabula - a strict, immutable, contract-checked in-memory table model
//!
//! A table pairs one schema with rows that conform to it exactly. Every
//! transformation checks its preconditions, builds fresh values, checks its
//! postconditions, and returns a new table; originals stay valid.

pub mod contract;
pub mod observability;
pub mod schema;
pub mod table;

//! Observability subsystem for tabula
//!
//! # Principles
//!
//! 1. Observability is read-only: emitting an event never affects a result
//! 2. One log line = one JSON event
//! 3. Deterministic key ordering
//! 4. Synchronous, no buffering, no background threads
//!
//! The contract layer is the only in-crate consumer; it records every
//! violation before the corresponding error is returned.

mod logger;

pub use logger::{emit, Severity};

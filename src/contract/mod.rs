//! Contract layer for tabula
//!
//! Every table-producing operation follows the same shape:
//!
//! 1. `require` its preconditions against the inputs
//! 2. construct fresh schema and/or row values
//! 3. `ensure` its postconditions against the result
//!
//! Each check takes an explicit, static description of the property being
//! evaluated (e.g. `"values.len() == table.nrows()"`). The layer's only job
//! is to evaluate the boolean and attach that label to the failure; it never
//! inspects source text and never downgrades a violation.

mod errors;

pub use errors::{ContractError, ContractResult};

use crate::observability::{emit, Severity};

/// Checks a precondition against an operation's inputs.
///
/// No-op when the condition holds. On violation, logs a structured event and
/// returns [`ContractError::PreconditionViolated`] labeled with `check`.
pub fn require(condition: bool, check: &str) -> ContractResult<()> {
    if condition {
        return Ok(());
    }
    emit(
        Severity::Error,
        "CONTRACT_VIOLATED",
        &[("kind", "precondition"), ("check", check)],
    );
    Err(ContractError::PreconditionViolated {
        check: check.to_string(),
    })
}

/// Checks a postcondition against an operation's result.
///
/// A violation here is the crate's own invariant failing, not caller error.
pub fn ensure(condition: bool, check: &str) -> ContractResult<()> {
    if condition {
        return Ok(());
    }
    emit(
        Severity::Error,
        "CONTRACT_VIOLATED",
        &[("kind", "postcondition"), ("check", check)],
    );
    Err(ContractError::PostconditionViolated {
        check: check.to_string(),
    })
}

/// Builds the failure for a declared-but-unsupported operation.
pub fn unsupported(operation: &'static str) -> ContractError {
    emit(
        Severity::Warn,
        "OPERATION_UNSUPPORTED",
        &[("operation", operation)],
    );
    ContractError::NotImplemented { operation }
}

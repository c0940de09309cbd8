//! # Contract Errors
//!
//! Failure kinds for the require/ensure contract layer.

use thiserror::Error;

/// Result type for contract-checked operations
pub type ContractResult<T> = Result<T, ContractError>;

/// Failures raised by contract-checked table operations
///
/// The three kinds are deliberately distinct so callers can tell caller
/// misuse, internal corruption, and missing features apart. None of them is
/// ever caught and downgraded inside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Caller-supplied inputs broke the operation's stated contract
    #[error("precondition violated: {check}")]
    PreconditionViolated {
        /// Human-readable statement of the checked property
        check: String,
    },

    /// The operation's own invariant failed to hold after construction.
    /// Signals a programming-logic bug, not a recoverable runtime condition.
    #[error("postcondition violated: {check}")]
    PostconditionViolated {
        /// Human-readable statement of the checked property
        check: String,
    },

    /// Operation is declared but has no behavior yet
    #[error("operation '{operation}' is not implemented")]
    NotImplemented {
        /// Name of the unsupported operation
        operation: &'static str,
    },
}

impl ContractError {
    /// Returns the short kind tag used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ContractError::PreconditionViolated { .. } => "precondition",
            ContractError::PostconditionViolated { .. } => "postcondition",
            ContractError::NotImplemented { .. } => "not_implemented",
        }
    }

    /// Returns the checked property, or the operation name for stubs
    pub fn check(&self) -> &str {
        match self {
            ContractError::PreconditionViolated { check } => check,
            ContractError::PostconditionViolated { check } => check,
            ContractError::NotImplemented { operation } => operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let pre = ContractError::PreconditionViolated { check: "x".into() };
        let post = ContractError::PostconditionViolated { check: "y".into() };
        let stub = ContractError::NotImplemented { operation: "vcat" };

        assert_eq!(pre.kind(), "precondition");
        assert_eq!(post.kind(), "postcondition");
        assert_eq!(stub.kind(), "not_implemented");
    }

    #[test]
    fn test_message_carries_check_text() {
        let err = ContractError::PreconditionViolated {
            check: "values.len() == table.nrows()".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("precondition violated"));
        assert!(display.contains("values.len() == table.nrows()"));
    }

    #[test]
    fn test_not_implemented_names_operation() {
        let err = ContractError::NotImplemented {
            operation: "left_join",
        };
        assert_eq!(err.check(), "left_join");
        assert!(format!("{}", err).contains("left_join"));
    }
}

//! Error types for rule construction and evaluation.
//!
//! A rule that fails validation returns `Ok(false)`. [`RuleError`] is
//! reserved for programmer mistakes: bad arguments at construction time,
//! or resolution functions that break the boolean contract at call time.

use std::fmt;

/// Error raised when building or evaluating a rule.
///
/// # Examples
///
/// ```rust
/// use okay::{compose, Rule, RuleError};
///
/// let err = compose(Vec::<Rule<i32>>::new()).unwrap_err();
/// assert!(err.is_invalid_argument());
/// assert_eq!(err.to_string(), "rules are missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A constructor received a missing or unusable argument.
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Human readable description of the problem.
        reason: String,
    },
    /// A resolution function did not produce a boolean verdict.
    ContractViolation,
}

impl RuleError {
    /// Create an invalid argument error.
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Returns true if this is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true if this is a contract violation.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation)
    }

    /// Name of the argument that failed, if any.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { argument, .. } => Some(*argument),
            Self::ContractViolation => None,
        }
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason, .. } => write!(f, "{}", reason),
            Self::ContractViolation => write!(f, "rules must return a boolean value"),
        }
    }
}

impl std::error::Error for RuleError {}

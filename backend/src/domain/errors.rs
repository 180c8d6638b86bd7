//! Error kinds for the calculation core.
//!
//! Both kinds are terminal for the current request: the core never retries
//! or guesses a correction. The REST layer turns them into user-facing
//! responses.

use thiserror::Error;

/// Malformed or out-of-range input, raised when a [`super::User`] is
/// constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("gross salary must be a non-negative number, got {0}")]
    InvalidSalary(f64),

    #[error("expense '{name}' must have a non-negative amount, got {amount}")]
    InvalidExpenseAmount { name: String, amount: f64 },

    #[error("unrecognized recurrence period '{0}' (expected weekly, monthly or annual)")]
    UnknownPeriod(String),
}

/// Unusable tax-bracket configuration, raised by
/// [`super::Calculator::compute`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("tax bracket set is empty")]
    EmptyBrackets,

    #[error("tax bracket {index} has an invalid lower bound {lower_bound} (must be a non-negative number)")]
    InvalidLowerBound { index: usize, lower_bound: f64 },

    #[error("tax brackets must be strictly ascending by lower bound (bracket {index} starts at {lower_bound})")]
    UnorderedBrackets { index: usize, lower_bound: f64 },

    #[error("tax bracket starting at {lower_bound} has a negative rate {rate}")]
    NegativeRate { lower_bound: f64, rate: f64 },
}

//! Result and error types for the core library

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an account refused a deposit or withdrawal
///
/// The display strings are the messages shown to the user. Every deposit-side
/// refusal shares one message and every withdrawal-side refusal shares another.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    #[error("Amount cannot be negative.")]
    NegativeAmount,

    #[error("Deposit failed. Exceeds limit.")]
    DepositLimitExceeded { limit: Decimal },

    /// The new balance would not fit in a decimal
    #[error("Deposit failed. Amount too large.")]
    AmountTooLarge,

    #[error("Withdrawal failed. Exceeds limit or insufficient balance.")]
    WithdrawalLimitExceeded { limit: Decimal },

    #[error("Withdrawal failed. Exceeds limit or insufficient balance.")]
    InsufficientFunds,

    #[error("Withdrawal failed. Exceeds limit or insufficient balance.")]
    WithdrawalsNotPermitted,
}

impl Refusal {
    /// True for refusals raised by a deposit
    pub fn is_deposit_side(&self) -> bool {
        matches!(self, Self::DepositLimitExceeded { .. } | Self::AmountTooLarge)
    }
}

/// Core library error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input failed a format or range rule (age, BVN, numeric text)
    #[error("{0}")]
    Validation(String),

    /// Unknown BVN or wrong password at login
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Incorrect old password")]
    IncorrectPassword,

    #[error("Not logged in.")]
    NotLoggedIn,

    #[error("No account created.")]
    NoAccount,

    #[error(transparent)]
    Refused(#[from] Refusal),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Taxonomy bucket, used as the error context in log events
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::InvalidCredentials | Self::IncorrectPassword => "authentication",
            Self::Refused(Refusal::NegativeAmount) => "validation",
            Self::Refused(_) => "policy",
            Self::NotLoggedIn | Self::NoAccount => "precondition",
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Operation result with optional context (for JSON output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            context: None,
        }
    }

    /// Create a failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            context: None,
        }
    }

    /// Attach a context entry
    pub fn with_context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::fail(e.to_string()).with_context("category", e.category().into()),
        }
    }
}

//! Error types for the bank
//!
//! Every failure an operation can report is a variant of [`Error`]. Domain
//! errors are recovered by the command loop, which prints their message as a
//! single line and leaves account state unchanged. Only [`Error::Io`] ends a
//! session.

use std::fmt::Display;
use thiserror::Error;

/// Bank error type
#[derive(Debug, Error)]
pub enum Error {
    /// No account is registered under the given name
    #[error("Name: {0} does not exist.")]
    AccountNotFound(String),

    /// An account is already registered under the given name
    #[error("Name '{0}' already exists.")]
    NameAlreadyExists(String),

    /// Passcode is not exactly four digits
    #[error("Invalid passcode")]
    InvalidPasscodeFormat,

    /// Passcode does not match the account
    #[error("Wrong passcode")]
    WrongPasscode,

    /// Withdrawal exceeds the balance
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Deposit is negative or would overflow the balance
    #[error("Error depositing")]
    ArithmeticOverflow,

    /// Interest no longer fits in a balance
    #[error("Error calculating interest")]
    InterestOverflow,

    /// Amount that can never be valid for the operation, e.g. a negative balance
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Menu selection out of range
    #[error("Invalid choice")]
    InvalidMenuChoice,

    /// Non-numeric text where a number was expected
    #[error("Unexpected input")]
    MalformedNumericInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the command loop can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::InvalidAmount(msg) => Error::InvalidAmount(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                // Messages of the remaining variants are shown to the user verbatim
                other => other,
            }
        })
    }
}

/// Trait for converting other error types to our Error type
pub trait IntoError {
    /// Convert to a configuration error
    fn into_error(self, message: &str) -> Error;
}

impl<E: std::error::Error> IntoError for E {
    fn into_error(self, message: &str) -> Error {
        Error::ConfigurationError(format!("{}: {}", message, self))
    }
}

//! Custom error types for expense-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Note that a missing delete target is deliberately NOT an error: the ledger
//! reports it as a normal outcome and the process exits successfully.

use thiserror::Error;

/// The main error type for expense-tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors (storage path resolution)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The store could not be read or written
    #[error("I/O error: {0}")]
    Io(String),

    /// The store exists but its content could not be decoded
    #[error("Corrupt store: {0}")]
    Corrupt(String),
}

impl ExpenseError {
    /// Check if this error means the store content is undecodable
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err.to_string())
    }
}

/// Result type alias for expense-tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

//! expense-tracker - Simple expense tracking from the command line
//!
//! This library provides the core functionality for the expense-tracker CLI.
//! Expenses are kept as a single ordered record set in one JSON file; every
//! invocation loads the full set, performs one operation, and (for mutating
//! operations) writes the full set back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Storage path resolution
//! - `error`: Custom error types
//! - `models`: The expense record type
//! - `storage`: JSON file storage layer
//! - `services`: Ledger business logic (add, delete, list, summary)
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers bridging clap to the ledger

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::ExpenseError;

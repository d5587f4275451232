//! Business logic layer
//!
//! The ledger implements add, delete, list, and summary over the record set
//! held by the storage layer.

pub mod ledger;

pub use ledger::{DeleteOutcome, Ledger};

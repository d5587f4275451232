//! Configuration for expense-tracker
//!
//! Currently limited to storage path resolution.

pub mod paths;

pub use paths::ExpensePaths;

//! Core data models for expense-tracker
//!
//! The domain has a single entity: the expense record.

pub mod expense;

pub use expense::Expense;

//! Terminal output formatting

pub mod expense;

pub use expense::{format_amount, format_expense_list, format_expense_row, format_summary};

//! Storage layer for expense-tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. This layer owns file existence and load/save of the record set
//! and carries no business logic.
//!
//! The store is a shared mutable file with no locking discipline: two
//! concurrent invocations can race and the last writer wins. Acceptable for
//! the intended single-user, one-process-at-a-time usage.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, write_json_atomic};

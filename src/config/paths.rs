//! Path management for expense-tracker
//!
//! Resolves where the expense store lives on disk.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. `<system temp dir>/expense-tracker`
//!
//! The resolved path is held as an explicit value and passed into the storage
//! layer at construction, so tests can point the whole application at a
//! throwaway directory without touching process environment.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

/// Environment variable overriding the storage directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by expense-tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense-tracker data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// Path resolution:
    /// 1. `EXPENSE_TRACKER_DATA_DIR` env var (explicit override)
    /// 2. `<system temp dir>/expense-tracker`
    ///
    /// # Errors
    ///
    /// Returns an error if the env var override is set but empty.
    pub fn new() -> ExpenseResult<Self> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if custom.trim().is_empty() => {
                return Err(ExpenseError::Config(format!("{} is set but empty", DATA_DIR_ENV)));
            }
            Ok(custom) => PathBuf::from(custom),
            Err(_) => std::env::temp_dir().join("expense-tracker"),
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Ensure the base directory (and all missing parents) exists
    ///
    /// Idempotent; no error if already present.
    pub fn ensure_directories(&self) -> ExpenseResult<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create data directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })?;

        Ok(())
    }
}

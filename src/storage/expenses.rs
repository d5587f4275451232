//! Expense store: load/save of the full record set
//!
//! The on-disk format is a single JSON array of expense objects in insertion
//! order. The whole set is one persistence unit: every save rewrites the file
//! completely, and every load decodes it completely. There is no in-memory
//! cache; each operation sees the file as it is at that moment.

use std::path::PathBuf;

use crate::config::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Storage gateway for the expense record set
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store rooted at the resolved paths
    pub fn new(paths: &ExpensePaths) -> Self {
        Self {
            path: paths.expenses_file(),
        }
    }

    /// Create a store over an explicit file path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file backing this store
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Ensure the storage directory and JSON file exist
    ///
    /// Creates the containing directory chain if absent, and seeds the file
    /// with an empty record set if absent. Idempotent; safe to call before
    /// every access.
    pub fn ensure_store(&self) -> ExpenseResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        if !self.path.exists() {
            let empty: Vec<Expense> = Vec::new();
            write_json_atomic(&self.path, &empty)?;
        }

        Ok(())
    }

    /// Load the full record set from disk
    ///
    /// # Errors
    ///
    /// `Corrupt` if the file content cannot be decoded, `Io` if the file or
    /// its directory cannot be read.
    pub fn load_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.ensure_store()?;
        read_json(&self.path)
    }

    /// Save the full record set to disk, overwriting completely
    pub fn save_all(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &expenses)
    }
}

//! Expense ledger service
//!
//! Implements the four operations over the expense record set: add, delete,
//! list, and summary. The ledger keeps no state of its own; every operation
//! is a fresh load from the store, a computation, and (for mutating
//! operations) a save of the full set back.

use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Service implementing expense business logic
pub struct Ledger<'a> {
    store: &'a ExpenseStore,
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record existed and was removed
    Deleted,
    /// No record carried the requested id; the store was left untouched
    NotFound { id: u32 },
}

impl<'a> Ledger<'a> {
    /// Create a ledger over the given store
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Add a new expense dated today and return the created record
    ///
    /// The id is assigned as current record count + 1. After a delete this
    /// can collide with an existing id; that quirk is intentional and
    /// documented, since ids are count-derived rather than tracked through a
    /// persisted counter. Empty descriptions and negative amounts are
    /// accepted as-is.
    pub fn add(&self, description: &str, amount: f64) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load_all()?;

        let id = expenses.len() as u32 + 1;
        let expense = Expense::new(id, description, amount);

        expenses.push(expense.clone());
        self.store.save_all(&expenses)?;

        Ok(expense)
    }

    /// Delete the first expense whose id matches
    ///
    /// When no record matches, nothing is persisted and the store file is
    /// left byte-for-byte unchanged.
    pub fn delete(&self, id: u32) -> ExpenseResult<DeleteOutcome> {
        let mut expenses = self.store.load_all()?;

        match expenses.iter().position(|e| e.id == id) {
            Some(index) => {
                expenses.remove(index);
                self.store.save_all(&expenses)?;
                Ok(DeleteOutcome::Deleted)
            }
            None => Ok(DeleteOutcome::NotFound { id }),
        }
    }

    /// All expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.load_all()
    }

    /// Sum of amounts, optionally restricted to a month (1-12)
    ///
    /// An empty (or fully filtered-out) set sums to 0.0.
    pub fn summary(&self, month: Option<u32>) -> ExpenseResult<f64> {
        let expenses = self.store.load_all()?;

        let total = expenses
            .iter()
            .filter(|e| month.map_or(true, |m| e.month() == m))
            .map(|e| e.amount)
            // Explicit fold: `Sum<f64>` starts from -0.0, which would print
            // the documented empty-set total of 0.0 as "-0.00".
            .fold(0.0, |acc, amount| acc + amount);

        Ok(total)
    }
}

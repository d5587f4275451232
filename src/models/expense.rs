//! The expense record type
//!
//! An expense is a flat record with named, typed fields. All fields are
//! immutable after creation; the ledger only ever appends or removes whole
//! records. Deserialization fails on missing or mismatched fields, which is
//! how undecodable store content surfaces as a corrupt-store error.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single expense entry
///
/// Serialized as `{"id": 1, "date": "2025-01-15", "description": "...",
/// "amount": 10.5}`. The `date` field round-trips through chrono's default
/// `YYYY-MM-DD` representation, so a malformed date string in the file is
/// rejected at the serde boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Positive integer, assigned as record count + 1 at creation
    pub id: u32,
    /// Calendar date the expense was recorded
    pub date: NaiveDate,
    /// Free-text description, user-supplied (empty accepted)
    pub description: String,
    /// Amount in currency units; negative values are accepted
    pub amount: f64,
}

impl Expense {
    /// Create a new expense dated today (local time)
    pub fn new(id: u32, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            date: Local::now().date_naive(),
            description: description.into(),
            amount,
        }
    }

    /// Create an expense with an explicit date
    pub fn with_date(id: u32, date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
        }
    }

    /// The month component of the expense date (1-12)
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

//! Expense CLI commands
//!
//! Decodes user input into ledger calls and prints the user-facing
//! notifications. A missing delete target is a reported message, not an
//! error; every documented path here exits successfully.

use clap::Subcommand;

use crate::display::{format_expense_list, format_summary};
use crate::error::ExpenseResult;
use crate::services::{DeleteOutcome, Ledger};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Add an expense
    Add {
        /// Description of the expense
        #[arg(long)]
        description: String,
        /// Amount of the expense
        #[arg(long)]
        amount: f64,
    },
    /// Delete an expense
    Delete {
        /// ID of the expense to delete
        #[arg(long)]
        id: u32,
    },
    /// List all expenses
    List,
    /// Show summary of expenses
    Summary {
        /// Month for which to show summary
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
}

/// Handle an expense command
pub fn handle_command(store: &ExpenseStore, cmd: Commands) -> ExpenseResult<()> {
    let ledger = Ledger::new(store);

    match cmd {
        Commands::Add { description, amount } => {
            let expense = ledger.add(&description, amount)?;
            println!("Expense added successfully (ID: {})", expense.id);
        }
        Commands::Delete { id } => match ledger.delete(id)? {
            DeleteOutcome::Deleted => {
                println!("Expense deleted successfully");
            }
            DeleteOutcome::NotFound { id } => {
                println!("Expense with ID {} not found", id);
            }
        },
        Commands::List => {
            let expenses = ledger.list()?;
            println!("{}", format_expense_list(&expenses));
        }
        Commands::Summary { month } => {
            let total = ledger.summary(month)?;
            println!("{}", format_summary(total, month));
        }
    }

    Ok(())
}

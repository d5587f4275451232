use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::{handle_command, Commands};
use expense_tracker::config::ExpensePaths;
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Expense Tracker",
    long_about = "A simple expense tracker CLI application to manage your finances. \
                  Expenses are stored in a single JSON file under the system \
                  temporary directory (override with EXPENSE_TRACKER_DATA_DIR)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let store = ExpenseStore::new(&paths);

    handle_command(&store, cli.command)?;

    Ok(())
}

//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display. Amounts
//! are always rendered with a leading `$` and exactly two decimal places.

use crate::models::Expense;

/// Format an amount as `$X.XX`
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a single expense for display (list row)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{}   {}  {}  {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.description,
        format_amount(expense.amount)
    )
}

/// Format a list of expenses as a header plus one row per record
///
/// Records are shown in stored (insertion) order. An empty set produces the
/// "no records" message instead.
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let mut output = String::from("ID  Date       Description  Amount");
    for expense in expenses {
        output.push('\n');
        output.push_str(&format_expense_row(expense));
    }

    output
}

/// Format the summary total line
pub fn format_summary(total: f64, month: Option<u32>) -> String {
    match month {
        Some(m) => format!("Total expenses for month {}: {}", m, format_amount(total)),
        None => format!("Total expenses: {}", format_amount(total)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(id: u32, description: &str, amount: f64) -> Expense {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        Expense::with_date(id, date, description, amount)
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(5.0), "$5.00");
        assert_eq!(format_amount(10.5), "$10.50");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(-3.5), "$-3.50");
    }

    #[test]
    fn test_format_amount_rounds_half() {
        assert_eq!(format_amount(2.345), "$2.35");
        assert_eq!(format_amount(2.344), "$2.34");
    }

    #[test]
    fn test_format_row() {
        let row = format_expense_row(&expense(1, "Coffee", 5.0));
        assert_eq!(row, "1   2025-01-15  Coffee  $5.00");
    }

    #[test]
    fn test_format_list_with_header() {
        let expenses = vec![expense(1, "Lunch", 10.0), expense(2, "Coffee", 5.0)];
        let output = format_expense_list(&expenses);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "ID  Date       Description  Amount");
        assert_eq!(lines[1], "1   2025-01-15  Lunch  $10.00");
        assert_eq!(lines[2], "2   2025-01-15  Coffee  $5.00");
    }

    #[test]
    fn test_format_list_empty() {
        assert_eq!(format_expense_list(&[]), "No expenses recorded.");
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(format_summary(15.0, None), "Total expenses: $15.00");
        assert_eq!(
            format_summary(15.0, Some(1)),
            "Total expenses for month 1: $15.00"
        );
        assert_eq!(format_summary(0.0, None), "Total expenses: $0.00");
    }
}

//! End-to-end CLI tests
//!
//! Each test runs the real binary against a throwaway storage directory via
//! the EXPENSE_TRACKER_DATA_DIR override.

use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense_tracker(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path());
    cmd
}

fn expenses_file(data_dir: &TempDir) -> std::path::PathBuf {
    data_dir.path().join("expenses.json")
}

#[test]
fn add_then_list_shows_record() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .args(["add", "--description", "Coffee", "--amount", "5.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully (ID: 1)"));

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    expense_tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID  Date       Description  Amount"))
        .stdout(predicate::str::contains(format!("1   {}  Coffee  $5.00", today)));
}

#[test]
fn list_empty_store() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));

    // First access creates the backing file
    assert!(expenses_file(&dir).exists());
}

#[test]
fn ids_are_count_plus_one() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .args(["add", "--description", "Lunch", "--amount", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 1)"));

    expense_tracker(&dir)
        .args(["add", "--description", "Coffee", "--amount", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 2)"));
}

#[test]
fn delete_then_delete_again_reports_not_found() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .args(["add", "--description", "Lunch", "--amount", "10"])
        .assert()
        .success();
    expense_tracker(&dir)
        .args(["add", "--description", "Coffee", "--amount", "5"])
        .assert()
        .success();

    expense_tracker(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted successfully"));

    expense_tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Lunch").not());

    let before = std::fs::read(expenses_file(&dir)).unwrap();

    // Exits normally; not-found is a message, not a failure
    expense_tracker(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense with ID 1 not found"));

    let after = std::fs::read(expenses_file(&dir)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn summary_totals_all_expenses() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .args(["add", "--description", "Lunch", "--amount", "10.0"])
        .assert()
        .success();
    expense_tracker(&dir)
        .args(["add", "--description", "Coffee", "--amount", "5.0"])
        .assert()
        .success();

    expense_tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $15.00"));
}

#[test]
fn summary_empty_store_is_zero() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $0.00"));
}

#[test]
fn summary_filters_by_month() {
    let dir = TempDir::new().unwrap();

    // Seed the store directly so the dates are fixed
    std::fs::write(
        expenses_file(&dir),
        r#"[
            {"id": 1, "date": "2025-01-01", "description": "Lunch", "amount": 10.0},
            {"id": 2, "date": "2025-01-02", "description": "Coffee", "amount": 5.0},
            {"id": 3, "date": "2025-02-10", "description": "Groceries", "amount": 42.5}
        ]"#,
    )
    .unwrap();

    expense_tracker(&dir)
        .args(["summary", "--month", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses for month 1: $15.00"));

    expense_tracker(&dir)
        .args(["summary", "--month", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses for month 3: $0.00"));
}

#[test]
fn summary_rejects_out_of_range_month() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .args(["summary", "--month", "13"])
        .assert()
        .failure();
}

#[test]
fn corrupt_store_aborts_without_saving() {
    let dir = TempDir::new().unwrap();
    std::fs::write(expenses_file(&dir), "not json").unwrap();
    let before = std::fs::read(expenses_file(&dir)).unwrap();

    expense_tracker(&dir)
        .args(["add", "--description", "Coffee", "--amount", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt store"));

    let after = std::fs::read(expenses_file(&dir)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn add_requires_description_and_amount() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir).arg("add").assert().failure();
    expense_tracker(&dir)
        .args(["add", "--description", "Coffee"])
        .assert()
        .failure();
    expense_tracker(&dir)
        .args(["add", "--amount", "5"])
        .assert()
        .failure();
}

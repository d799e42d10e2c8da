#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use budget_engine::{
    domain::{ExpenseDraft, Frequency, IncomeDraft},
    storage::JsonFileStore,
    BudgetManager,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated data directory for a single test.
pub fn temp_data_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().join("data");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a manager over a file store rooted at `dir`.
pub fn open_manager(dir: &PathBuf) -> BudgetManager {
    let store = JsonFileStore::new(dir.clone()).expect("create json file store");
    BudgetManager::open(Box::new(store))
}

/// Seeds the household used across scenarios: one monthly salary, one
/// quarterly bonus and a mix of expenses.
pub fn seed_household(manager: &mut BudgetManager) {
    manager.add_income(IncomeDraft::fixed(3000.0, "Salary", Frequency::MONTHLY));
    manager.add_income(IncomeDraft::fixed(1200.0, "Bonus", Frequency::QUARTERLY));
    manager.add_expense(ExpenseDraft::fixed(1100.0, "Rent", Frequency::MONTHLY));
    manager.add_expense(ExpenseDraft::variable(250.0, "Groceries"));
    manager.add_expense(ExpenseDraft::ant(35.0, "Coffee"));
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

use std::collections::HashSet;

use crate::domain::{ExpenseType, IncomeType, Ledger, MAX_TOTAL_PCT};

/// Detects records and settings that break the data-model invariants.
///
/// Nothing here rejects data; loaded state is used as-is and these messages
/// only feed the logs.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for income in &ledger.incomes {
        if !seen.insert(&income.id) {
            warnings.push(format!("income {} has a duplicate id", income.id));
        }
        if !(income.amount.is_finite() && income.amount > 0.0) {
            warnings.push(format!(
                "income {} has non-positive amount {}",
                income.id, income.amount
            ));
        }
        if income.concept.trim().is_empty() {
            warnings.push(format!("income {} has an empty concept", income.id));
        }
        if !income.frequency.is_valid() {
            warnings.push(format!(
                "income {} has out-of-range frequency {}",
                income.id,
                income.frequency.months()
            ));
        } else if income.kind == IncomeType::Variable && income.frequency.months() != 1 {
            warnings.push(format!(
                "variable income {} has frequency {}",
                income.id,
                income.frequency.months()
            ));
        }
    }

    let mut seen = HashSet::new();
    for expense in &ledger.expenses {
        if !seen.insert(&expense.id) {
            warnings.push(format!("expense {} has a duplicate id", expense.id));
        }
        if !(expense.amount.is_finite() && expense.amount > 0.0) {
            warnings.push(format!(
                "expense {} has non-positive amount {}",
                expense.id, expense.amount
            ));
        }
        if expense.concept.trim().is_empty() {
            warnings.push(format!("expense {} has an empty concept", expense.id));
        }
        if !expense.frequency.is_valid() {
            warnings.push(format!(
                "expense {} has out-of-range frequency {}",
                expense.id,
                expense.frequency.months()
            ));
        } else if expense.kind != ExpenseType::Fixed && expense.frequency.months() != 1 {
            warnings.push(format!(
                "{} expense {} has frequency {}",
                expense.kind.to_string().to_lowercase(),
                expense.id,
                expense.frequency.months()
            ));
        }
    }

    let allocation = &ledger.allocation;
    if allocation.exceeds_limit() {
        warnings.push(format!(
            "allocation sums to {}%, above the {}% limit",
            allocation.total_pct(),
            MAX_TOTAL_PCT
        ));
    }

    warnings
}

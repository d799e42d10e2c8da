//! Append and delete helpers for the income and expense collections.

use crate::domain::{ExpenseDraft, ExpenseRecord, IncomeDraft, IncomeRecord, Ledger, RecordId};

/// Turns drafts into records and applies them to a [`Ledger`].
///
/// Drafts are not validated here; entry forms call `validate()` first.
pub struct LedgerService;

impl LedgerService {
    /// Appends a new income and returns its freshly assigned identifier.
    pub fn add_income(ledger: &mut Ledger, draft: IncomeDraft) -> RecordId {
        ledger.add_income(IncomeRecord::from_draft(draft))
    }

    /// Removes the income identified by `id`. Unknown ids are ignored.
    pub fn remove_income(ledger: &mut Ledger, id: &RecordId) -> bool {
        ledger.remove_income(id)
    }

    /// Appends a new expense and returns its freshly assigned identifier.
    pub fn add_expense(ledger: &mut Ledger, draft: ExpenseDraft) -> RecordId {
        ledger.add_expense(ExpenseRecord::from_draft(draft))
    }

    /// Removes the expense identified by `id`. Unknown ids are ignored.
    pub fn remove_expense(ledger: &mut Ledger, id: &RecordId) -> bool {
        ledger.remove_expense(id)
    }
}

use crate::domain::{
    allocation::AllocationConfig,
    common::RecordId,
    expense::{ExpenseRecord, ExpenseType},
    income::IncomeRecord,
};

/// In-memory snapshot of everything the engine owns for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub incomes: Vec<IncomeRecord>,
    pub expenses: Vec<ExpenseRecord>,
    pub allocation: AllocationConfig,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(
        incomes: Vec<IncomeRecord>,
        expenses: Vec<ExpenseRecord>,
        allocation: AllocationConfig,
    ) -> Self {
        Self {
            incomes,
            expenses,
            allocation,
        }
    }

    pub fn add_income(&mut self, record: IncomeRecord) -> RecordId {
        let id = record.id.clone();
        self.incomes.push(record);
        id
    }

    /// Drops every income with `id`; returns whether anything was removed.
    pub fn remove_income(&mut self, id: &RecordId) -> bool {
        let before = self.incomes.len();
        self.incomes.retain(|record| &record.id != id);
        self.incomes.len() != before
    }

    pub fn income(&self, id: &RecordId) -> Option<&IncomeRecord> {
        self.incomes.iter().find(|record| &record.id == id)
    }

    pub fn add_expense(&mut self, record: ExpenseRecord) -> RecordId {
        let id = record.id.clone();
        self.expenses.push(record);
        id
    }

    /// Drops every expense with `id`; returns whether anything was removed.
    pub fn remove_expense(&mut self, id: &RecordId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|record| &record.id != id);
        self.expenses.len() != before
    }

    pub fn expense(&self, id: &RecordId) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|record| &record.id == id)
    }

    /// Expenses of a single category in insertion order.
    pub fn expenses_of(&self, kind: ExpenseType) -> impl Iterator<Item = &ExpenseRecord> + '_ {
        self.expenses.iter().filter(move |record| record.kind == kind)
    }

    pub fn set_allocation(&mut self, allocation: AllocationConfig) {
        self.allocation = allocation;
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }
}

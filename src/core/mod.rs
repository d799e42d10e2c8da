//! Session state, services, and the budget calculator.

pub mod budget_manager;
pub mod services;
pub mod warnings;

pub use budget_manager::{BudgetManager, LoadReport, PersistOperation, PersistenceFailure};
pub use services::{
    AllocationService, BucketAmounts, BudgetSummary, CategoryAmounts, LedgerService,
    SummaryService,
};
pub use warnings::ledger_warnings;

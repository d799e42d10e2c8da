pub mod allocation_service;
pub mod ledger_service;
pub mod summary_service;

pub use allocation_service::AllocationService;
pub use ledger_service::LedgerService;
pub use summary_service::{BucketAmounts, BudgetSummary, CategoryAmounts, SummaryService};

pub mod allocation;
pub mod common;
pub mod expense;
pub mod income;
pub mod ledger;

pub use allocation::{AllocationConfig, Bucket, MAX_TOTAL_PCT};
pub use common::{Amounted, Displayable, Frequency, Identifiable, NamedEntity, RecordId};
pub use expense::{ExpenseDraft, ExpenseRecord, ExpenseType};
pub use income::{IncomeDraft, IncomeRecord, IncomeType};
pub use ledger::Ledger;

#![doc(test(attr(deny(warnings))))]

//! Budget Engine turns logged incomes and expenses plus a percentage-based
//! allocation into the derived figures a personal budgeting app displays.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{BudgetManager, BudgetSummary};
pub use crate::errors::{BudgetError, Result};

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    utils::init_tracing();
}

use std::result::Result as StdResult;

use thiserror::Error;

use crate::storage::StorageError;

/// Unified error type for the engine's domain, storage and configuration layers.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Persistence(StorageError::Io(err))
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Config(err.to_string())
    }
}

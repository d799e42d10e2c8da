//! Key-value persistence collaborators.
//!
//! The engine hands structured JSON values to a [`KeyValueStore`] and never
//! inspects how they are encoded on the other side.

pub mod json_backend;
pub mod memory;

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

/// Key holding the income collection.
pub const INCOMES_KEY: &str = "incomes";
/// Key holding the expense collection.
pub const EXPENSES_KEY: &str = "expenses";
/// Key holding the allocation split.
pub const ALLOCATION_KEY: &str = "distribution";

/// Every key the engine writes, in load order.
pub const ENGINE_KEYS: [&str; 3] = [INCOMES_KEY, EXPENSES_KEY, ALLOCATION_KEY];

/// Failures raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String-keyed store of opaque structured values.
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> StorageResult<Option<Value>>;
    fn set(&self, key: &str, value: &Value) -> StorageResult<()>;
    /// Removing an absent key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Lets several owners (a manager and a test, say) share one store.
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &Value) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::core::{
    services::{AllocationService, BudgetSummary, LedgerService, SummaryService},
    warnings::ledger_warnings,
};
use crate::domain::{
    AllocationConfig, ExpenseDraft, ExpenseRecord, ExpenseType, IncomeDraft, IncomeRecord, Ledger,
    RecordId,
};
use crate::errors::{BudgetError, Result};
use crate::storage::{
    KeyValueStore, StorageError, ALLOCATION_KEY, ENGINE_KEYS, EXPENSES_KEY, INCOMES_KEY,
};

/// Storage call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOperation {
    Read,
    Write,
    Remove,
}

impl fmt::Display for PersistOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PersistOperation::Read => "read",
            PersistOperation::Write => "write",
            PersistOperation::Remove => "remove",
        };
        f.write_str(label)
    }
}

/// Record of a storage failure that was logged instead of returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceFailure {
    pub key: String,
    pub operation: PersistOperation,
    pub message: String,
}

/// Outcome of reading persisted state at session start.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub incomes: usize,
    pub expenses: usize,
    pub allocation_defaulted: bool,
    /// Stored records that could not be parsed and were left out.
    pub skipped_records: usize,
    pub warnings: Vec<String>,
}

/// Owns one session's ledger and keeps it in step with a key-value store.
///
/// Every mutator applies its change in memory first, then writes the whole
/// affected collection. A failed write is logged and recorded; in-memory state
/// stays authoritative for the rest of the session.
pub struct BudgetManager {
    ledger: Ledger,
    store: Box<dyn KeyValueStore>,
    last_failure: Option<PersistenceFailure>,
    failure_count: usize,
}

impl BudgetManager {
    /// Creates a manager with default state. Call [`BudgetManager::load`] to read persisted data.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            ledger: Ledger::new(),
            store,
            last_failure: None,
            failure_count: 0,
        }
    }

    /// Creates a manager and immediately loads persisted state.
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let mut manager = Self::new(store);
        manager.load();
        manager
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Replaces in-memory state with whatever the store holds.
    ///
    /// Absent, null, unreadable or malformed values fall back to defaults.
    /// Collections are parsed record by record: a record that cannot be read
    /// is skipped and reported while the rest of its collection is kept.
    pub fn load(&mut self) -> LoadReport {
        let mut skipped = Vec::new();
        let incomes: Vec<IncomeRecord> = self.read_collection(INCOMES_KEY, &mut skipped);
        let expenses: Vec<ExpenseRecord> = self.read_collection(EXPENSES_KEY, &mut skipped);
        let allocation: Option<AllocationConfig> = self.read_key(ALLOCATION_KEY);

        let allocation_defaulted = allocation.is_none();
        self.ledger = Ledger::with_parts(incomes, expenses, allocation.unwrap_or_default());

        let skipped_records = skipped.len();
        let mut warnings = skipped;
        warnings.extend(ledger_warnings(&self.ledger));
        for warning in &warnings {
            warn!(%warning, "problem found in loaded budget state");
        }
        info!(
            incomes = self.ledger.incomes.len(),
            expenses = self.ledger.expenses.len(),
            skipped_records,
            allocation_defaulted,
            "budget state loaded"
        );

        LoadReport {
            incomes: self.ledger.incomes.len(),
            expenses: self.ledger.expenses.len(),
            allocation_defaulted,
            skipped_records,
            warnings,
        }
    }

    /// Writes every collection and the allocation. Unlike the mutators, this
    /// reports the first failure to the caller.
    pub fn save_all(&mut self) -> Result<()> {
        let mut first_error = None;
        for key in ENGINE_KEYS {
            if let Err(err) = self.write_key(key) {
                self.record_failure(key, PersistOperation::Write, &err);
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(BudgetError::Persistence(err)),
            None => Ok(()),
        }
    }

    /// Restores defaults in memory and removes every persisted key.
    pub fn reset(&mut self) {
        self.ledger = Ledger::new();
        for key in ENGINE_KEYS {
            if let Err(err) = self.store.remove(key) {
                self.record_failure(key, PersistOperation::Remove, &err);
            }
        }
        info!("budget state reset to defaults");
    }

    pub fn add_income(&mut self, draft: IncomeDraft) -> RecordId {
        let id = LedgerService::add_income(&mut self.ledger, draft);
        debug!(%id, "income added");
        self.persist(INCOMES_KEY);
        id
    }

    pub fn remove_income(&mut self, id: &RecordId) -> bool {
        let removed = LedgerService::remove_income(&mut self.ledger, id);
        debug!(%id, removed, "income removal requested");
        self.persist(INCOMES_KEY);
        removed
    }

    pub fn add_expense(&mut self, draft: ExpenseDraft) -> RecordId {
        let id = LedgerService::add_expense(&mut self.ledger, draft);
        debug!(%id, "expense added");
        self.persist(EXPENSES_KEY);
        id
    }

    pub fn remove_expense(&mut self, id: &RecordId) -> bool {
        let removed = LedgerService::remove_expense(&mut self.ledger, id);
        debug!(%id, removed, "expense removal requested");
        self.persist(EXPENSES_KEY);
        removed
    }

    /// Saves a new split. Fails with a validation error, leaving the stored
    /// split unchanged, when the percentages add up to more than 100.
    pub fn update_allocation(&mut self, config: AllocationConfig) -> Result<()> {
        AllocationService::update(&mut self.ledger, config)?;
        debug!(
            savings = config.savings_pct,
            fixed = config.fixed_pct,
            variable = config.variable_pct,
            "allocation updated"
        );
        self.persist(ALLOCATION_KEY);
        Ok(())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn incomes(&self) -> &[IncomeRecord] {
        &self.ledger.incomes
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.ledger.expenses
    }

    pub fn expenses_of(&self, kind: ExpenseType) -> Vec<&ExpenseRecord> {
        self.ledger.expenses_of(kind).collect()
    }

    pub fn allocation(&self) -> &AllocationConfig {
        &self.ledger.allocation
    }

    /// Recomputes every derived aggregate from current state.
    pub fn summary(&self) -> BudgetSummary {
        SummaryService::summarize(&self.ledger)
    }

    pub fn last_persistence_failure(&self) -> Option<&PersistenceFailure> {
        self.last_failure.as_ref()
    }

    pub fn persistence_failures(&self) -> usize {
        self.failure_count
    }

    fn read_key<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let value = match self.store.get(key) {
            Ok(Some(Value::Null)) | Ok(None) => return None,
            Ok(Some(value)) => value,
            Err(err) => {
                self.record_failure(key, PersistOperation::Read, &err);
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                self.record_failure(key, PersistOperation::Read, &StorageError::Serde(err));
                None
            }
        }
    }

    /// Reads a stored array and parses each element on its own.
    fn read_collection<T: DeserializeOwned>(
        &mut self,
        key: &str,
        skipped: &mut Vec<String>,
    ) -> Vec<T> {
        let items: Vec<Value> = match self.read_key(key) {
            Some(items) => items,
            None => return Vec::new(),
        };
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value(item) {
                Ok(record) => records.push(record),
                Err(err) => {
                    skipped.push(format!("{key}[{index}] could not be read: {err}"));
                    self.record_failure(key, PersistOperation::Read, &StorageError::Serde(err));
                }
            }
        }
        records
    }

    /// Writes one key, recording a failure for later inspection.
    fn persist(&mut self, key: &str) {
        if let Err(err) = self.write_key(key) {
            self.record_failure(key, PersistOperation::Write, &err);
        }
    }

    fn write_key(&self, key: &str) -> std::result::Result<(), StorageError> {
        let value = self.snapshot(key)?;
        self.store.set(key, &value)
    }

    fn snapshot(&self, key: &str) -> std::result::Result<Value, StorageError> {
        let value = match key {
            INCOMES_KEY => to_value(&self.ledger.incomes)?,
            EXPENSES_KEY => to_value(&self.ledger.expenses)?,
            ALLOCATION_KEY => to_value(&self.ledger.allocation)?,
            other => {
                return Err(StorageError::Unavailable(format!(
                    "no engine state is stored under `{other}`"
                )))
            }
        };
        Ok(value)
    }

    fn record_failure(&mut self, key: &str, operation: PersistOperation, err: &StorageError) {
        match operation {
            PersistOperation::Read => {
                warn!(key, %operation, error = %err, "storage read failed")
            }
            PersistOperation::Write | PersistOperation::Remove => {
                error!(key, %operation, error = %err, "storage operation failed")
            }
        }
        self.failure_count += 1;
        self.last_failure = Some(PersistenceFailure {
            key: key.to_string(),
            operation,
            message: err.to_string(),
        });
    }
}

fn to_value<T: Serialize>(value: &T) -> std::result::Result<Value, StorageError> {
    Ok(serde_json::to_value(value)?)
}

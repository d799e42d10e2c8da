mod common;

use std::{fs, sync::Arc};

use budget_engine::{
    config::{Config, ConfigManager},
    domain::{AllocationConfig, ExpenseType, Frequency, IncomeDraft, IncomeType},
    storage::{
        JsonFileStore, KeyValueStore, MemoryStore, ALLOCATION_KEY, EXPENSES_KEY, INCOMES_KEY,
    },
    BudgetManager,
};
use common::{assert_close, open_manager, seed_household, temp_data_dir};

#[test]
fn state_survives_a_new_session() {
    let dir = temp_data_dir();
    let mut first = open_manager(&dir);
    seed_household(&mut first);
    first
        .update_allocation(AllocationConfig::new(25.0, 45.0, 30.0))
        .expect("valid allocation");
    let before = first.summary();

    let second = open_manager(&dir);
    assert_eq!(second.incomes(), first.incomes());
    assert_eq!(second.expenses(), first.expenses());
    assert_eq!(second.allocation(), &AllocationConfig::new(25.0, 45.0, 30.0));
    assert_eq!(second.summary(), before);
}

#[test]
fn fresh_directory_loads_defaults() {
    let dir = temp_data_dir();
    let mut manager = BudgetManager::new(Box::new(
        JsonFileStore::new(dir.clone()).expect("create store"),
    ));
    let report = manager.load();

    assert!(report.allocation_defaulted);
    assert_eq!(report.incomes, 0);
    assert_eq!(report.expenses, 0);
    assert!(report.warnings.is_empty());
    assert_eq!(manager.allocation(), &AllocationConfig::default());
    assert!(manager.last_persistence_failure().is_none());
}

#[test]
fn removal_is_persisted_immediately() {
    let dir = temp_data_dir();
    let mut manager = open_manager(&dir);
    let id = manager.add_income(IncomeDraft::fixed(3000.0, "Salary", Frequency::MONTHLY));
    manager.remove_income(&id);

    let reopened = open_manager(&dir);
    assert!(reopened.incomes().is_empty());
}

#[test]
fn legacy_blobs_load_with_original_spellings() {
    let store = MemoryStore::new()
        .with_raw(
            INCOMES_KEY,
            r#"[{"id":"1718000000000","amount":1200,"concept":"Bono","type":"fijo","frequency":3},
                {"id":"1718000000001","amount":500,"concept":"Extra","type":"variable","frequency":1}]"#,
        )
        .with_raw(
            EXPENSES_KEY,
            r#"[{"id":"1718000000002","amount":15,"concept":"Cafe","type":"hormiga","frequency":1}]"#,
        )
        .with_raw(ALLOCATION_KEY, r#"{"savings":10,"fixed":60,"variable":30}"#);
    let manager = BudgetManager::open(Box::new(store));

    assert_eq!(manager.incomes()[0].kind, IncomeType::Fixed);
    assert_eq!(manager.expenses()[0].kind, ExpenseType::Ant);
    assert_eq!(manager.allocation(), &AllocationConfig::new(10.0, 60.0, 30.0));
    assert_close(manager.summary().normalized_income, 900.0);
    assert_close(manager.summary().variable_headroom, 900.0 * 0.3 - 15.0);
}

#[test]
fn null_and_malformed_values_fall_back_to_defaults() {
    let store = MemoryStore::new()
        .with_raw(INCOMES_KEY, "null")
        .with_raw(EXPENSES_KEY, r#"{"not":"a list"}"#)
        .with_raw(ALLOCATION_KEY, "{broken");
    let mut manager = BudgetManager::new(Box::new(store));
    let report = manager.load();

    assert!(manager.incomes().is_empty());
    assert!(manager.expenses().is_empty());
    assert!(report.allocation_defaulted);
    assert_eq!(manager.allocation(), &AllocationConfig::default());
    assert_eq!(manager.persistence_failures(), 2);
}

#[test]
fn one_unreadable_record_does_not_erase_its_collection() {
    let store = Arc::new(MemoryStore::new().with_raw(
        INCOMES_KEY,
        r#"[{"id":"1718000000000","amount":3000,"concept":"Salary","type":"fijo","frequency":1},
            {"id":"1718000000001","amount":null,"concept":"Typo","type":"variable"}]"#,
    ));
    let mut manager = BudgetManager::new(Box::new(store.clone()));
    let report = manager.load();

    assert_eq!(report.incomes, 1);
    assert_eq!(report.skipped_records, 1);
    assert_eq!(manager.incomes()[0].concept, "Salary");

    manager.add_income(IncomeDraft::variable(10.0, "Tip"));
    let stored = store.get(INCOMES_KEY).expect("read").expect("incomes stored");
    let concepts: Vec<_> = stored
        .as_array()
        .expect("incomes array")
        .iter()
        .map(|record| record["concept"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(concepts, vec!["Salary".to_string(), "Tip".to_string()]);
}

#[test]
fn non_finite_amount_is_skipped_on_reload() {
    let dir = temp_data_dir();
    let mut manager = open_manager(&dir);
    manager.add_income(IncomeDraft::fixed(3000.0, "Salary", Frequency::MONTHLY));
    manager.add_income(IncomeDraft::variable(f64::NAN, "Broken"));

    let mut reopened = BudgetManager::new(Box::new(
        JsonFileStore::new(dir.clone()).expect("create store"),
    ));
    let report = reopened.load();
    assert_eq!(report.skipped_records, 1);
    assert_eq!(reopened.incomes().len(), 1);
    assert_close(reopened.summary().normalized_income, 3000.0);
}

#[test]
fn corrupted_allocation_is_loaded_and_reported() {
    let store = MemoryStore::new()
        .with_raw(ALLOCATION_KEY, r#"{"savings":60,"fixed":60,"variable":60}"#);
    let mut manager = BudgetManager::new(Box::new(store));
    let report = manager.load();

    assert_eq!(manager.allocation(), &AllocationConfig::new(60.0, 60.0, 60.0));
    assert!(report.warnings.iter().any(|w| w.contains("180%")));
}

#[test]
fn reset_removes_persisted_files() {
    let dir = temp_data_dir();
    let mut manager = open_manager(&dir);
    seed_household(&mut manager);
    manager.save_all().expect("save all");

    let store = JsonFileStore::new(dir.clone()).expect("store");
    assert!(store.value_path(INCOMES_KEY).exists());
    assert!(store.value_path(ALLOCATION_KEY).exists());

    manager.reset();
    assert!(manager.incomes().is_empty());
    assert!(store.get(INCOMES_KEY).expect("read").is_none());
    assert!(store.get(EXPENSES_KEY).expect("read").is_none());
    assert!(store.get(ALLOCATION_KEY).expect("read").is_none());
}

#[test]
fn failed_write_diverges_until_next_successful_write() {
    let dir = temp_data_dir();
    let mut manager = open_manager(&dir);
    manager.add_income(IncomeDraft::fixed(3000.0, "Salary", Frequency::MONTHLY));

    let store = JsonFileStore::new(dir.clone()).expect("store");
    let incomes_path = store.value_path(INCOMES_KEY);
    let mut tmp = incomes_path.clone();
    tmp.set_extension("json.tmp");
    // A directory at the temp path makes the next write fail.
    fs::create_dir_all(&tmp).expect("block temp path");

    manager.add_income(IncomeDraft::variable(200.0, "Tips"));
    assert_eq!(manager.incomes().len(), 2);
    assert!(manager.last_persistence_failure().is_some());
    assert_eq!(open_manager(&dir).incomes().len(), 1);

    fs::remove_dir_all(&tmp).expect("unblock temp path");
    manager.add_income(IncomeDraft::variable(50.0, "Refund"));
    assert_eq!(open_manager(&dir).incomes().len(), 3);
}

#[test]
fn config_points_the_store_at_its_data_dir() {
    let dir = temp_data_dir();
    let base = dir.parent().expect("temp base").to_path_buf();
    let config_manager = ConfigManager::with_base_dir(base).expect("config manager");
    let config = Config {
        data_dir: Some(dir.clone()),
        ..Config::default()
    };
    config_manager.save(&config).expect("save config");

    let loaded = config_manager.load().expect("load config");
    let store = loaded.open_store().expect("open store");
    let mut manager = BudgetManager::open(Box::new(store));
    manager.add_income(IncomeDraft::fixed(100.0, "Interest", Frequency::MONTHLY));

    assert!(dir.join("incomes.json").exists());
}

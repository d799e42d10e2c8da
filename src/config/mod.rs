use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::BudgetError,
    storage::{
        json_backend::{tmp_path, write_atomic},
        JsonFileStore,
    },
    utils::paths::{app_data_dir, config_file_in, data_dir_in},
};

/// User preferences that surround the engine: where data lives and how
/// amounts and logs are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub precision: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root for persisted budget data. Defaults to `<app dir>/data`.
    pub data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            precision: 2,
            data_dir: None,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn resolve_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => data_dir_in(&app_data_dir()),
        }
    }

    /// Opens the file-backed store rooted at [`Config::resolve_data_dir`].
    pub fn open_store(&self) -> Result<JsonFileStore, BudgetError> {
        Ok(JsonFileStore::new(self.resolve_data_dir())?)
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Manager for the default location inside the application directory.
    pub fn from_app_dir() -> Self {
        Self::new(config_file_in(&app_data_dir()))
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(config_file_in(&base)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

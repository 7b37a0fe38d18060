//! Test harness for isolated store execution.
//!
//! Each `TestHarness` owns a temporary directory holding the database file
//! and any config files a test writes, so tests never share state.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use campus::config::CatalogConfig;
use campus::CatalogStore;

pub struct TestHarness {
    temp_dir: TempDir,
    /// Database file inside the temp directory. Not created until opened.
    pub db_path: PathBuf,
    pub config_dir: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        let db_path = base.join("data").join("campus.db");
        let config_dir = base.join("config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            db_path,
            config_dir,
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Opens (or reopens) the store at `db_path`.
    pub fn open_store(&self) -> CatalogStore {
        CatalogStore::open(&self.db_path).expect("Failed to open catalog store")
    }

    /// Opens the store and seeds the sample dataset.
    pub fn seeded_store(&self) -> CatalogStore {
        let store = self.open_store();
        store.seed_once().expect("Failed to seed catalog");
        store
    }

    pub fn write_config(&self, filename: &str, config: &CatalogConfig) -> PathBuf {
        let json = serde_json::to_string_pretty(config).expect("Failed to serialize config");
        self.write_config_str(filename, &json)
    }

    pub fn write_config_str(&self, filename: &str, json: &str) -> PathBuf {
        let path = self.config_dir.join(filename);
        std::fs::write(&path, json).expect("Failed to write config file");
        path
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

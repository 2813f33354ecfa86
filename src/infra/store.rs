//! Shared key-value store backing the cross-screen state.
//!
//! String keys map to string values: JSON for the two saved price records,
//! a stringified number for the shared shrinkage percentage. Every write
//! flushes to a JSON file under the platform config directory and bumps a
//! revision counter; open views observe the revision through the store's
//! `Signal`, which is the change notification between screens.

use std::{collections::HashMap, fs, io, path::PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::domain::ScarfSize;

pub const KEY_PRICE_90: &str = "price90cm";
pub const KEY_PRICE_50: &str = "price50cm";
pub const KEY_SHRINKAGE: &str = "shrinkagePercentage";

/// Store key holding the saved price record for a size.
pub fn price_key(size: ScarfSize) -> &'static str {
    match size {
        ScarfSize::Square90 => KEY_PRICE_90,
        ScarfSize::Square50 => KEY_PRICE_50,
    }
}

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ScarfWorks";
const APP_NAME: &str = "ScarfCosting";
const STORE_FILENAME: &str = "store.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default)]
pub struct Store {
    entries: HashMap<String, String>,
    path: Option<PathBuf>,
    revision: u64,
}

impl Store {
    /// Opens the store at the platform config location, loading whatever was
    /// persisted by a previous session.
    pub fn open() -> Self {
        match default_store_path() {
            Some(path) => Self::at_path(path),
            None => {
                println!("Shared store has no writable location; running in memory only.");
                Self::in_memory()
            }
        }
    }

    pub fn at_path(path: PathBuf) -> Self {
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default();
        Self {
            entries,
            path: Some(path),
            revision: 0,
        }
    }

    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Bumped on every write; equal revisions mean no store change happened.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get_raw(key)?.trim().parse().ok()
    }

    pub fn get_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        serde_json::from_str(self.get_raw(key)?).ok()
    }

    pub fn set_raw(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.revision += 1;
        if let Err(err) = self.flush() {
            println!("Failed to persist shared store: {err}");
        }
    }

    pub fn set_number(&mut self, key: &str, value: f64) {
        self.set_raw(key, value.to_string());
    }

    pub fn set_record<T: Serialize>(&mut self, key: &str, record: &T) {
        match serde_json::to_string(record) {
            Ok(json) => self.set_raw(key, json),
            Err(err) => println!("Failed to encode record for key {key}: {err}"),
        }
    }

    fn flush(&self) -> Result<(), StoreError> {
        let Some(path) = self.path.as_ref() else {
            // In-memory stores (no config dir, tests) skip the disk entirely.
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn default_store_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(STORE_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SavedPrice;

    #[test]
    fn numbers_round_trip_as_plain_strings() {
        let mut store = Store::in_memory();
        store.set_number(KEY_SHRINKAGE, 2.5);
        assert_eq!(store.get_raw(KEY_SHRINKAGE), Some("2.5"));
        assert_eq!(store.get_number(KEY_SHRINKAGE), Some(2.5));
    }

    #[test]
    fn records_round_trip_as_json() {
        let mut store = Store::in_memory();
        let record = SavedPrice {
            selling_price: 494.52,
            base_cost: 395.61,
            production_cost: 77.76,
            overhead_cost: 45.98,
        };
        store.set_record(price_key(ScarfSize::Square90), &record);

        let loaded: SavedPrice = store.get_record(KEY_PRICE_90).unwrap();
        assert_eq!(loaded, record);
        assert!(store.get_record::<SavedPrice>(KEY_PRICE_50).is_none());
    }

    #[test]
    fn every_write_bumps_the_revision() {
        let mut store = Store::in_memory();
        let start = store.revision();
        store.set_number(KEY_SHRINKAGE, 1.0);
        store.set_number(KEY_SHRINKAGE, 2.0);
        assert_eq!(store.revision(), start + 2);
    }

    #[test]
    fn garbage_values_read_as_absent() {
        let mut store = Store::in_memory();
        store.set_raw(KEY_SHRINKAGE, "not-a-number".to_string());
        assert_eq!(store.get_number(KEY_SHRINKAGE), None);
        assert!(store.get_record::<SavedPrice>(KEY_SHRINKAGE).is_none());
    }

    #[test]
    fn entries_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = Store::at_path(path.clone());
        store.set_number(KEY_SHRINKAGE, 3.0);
        store.set_record(
            KEY_PRICE_50,
            &SavedPrice {
                selling_price: 210.51,
                base_cost: 168.41,
                production_cost: 60.0,
                overhead_cost: 20.0,
            },
        );

        let reopened = Store::at_path(path);
        assert_eq!(reopened.get_number(KEY_SHRINKAGE), Some(3.0));
        let record: SavedPrice = reopened.get_record(KEY_PRICE_50).unwrap();
        assert_eq!(record.selling_price, 210.51);
    }
}

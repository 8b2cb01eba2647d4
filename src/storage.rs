//! Flat-Blob Persistence
//!
//! Two independent JSON blobs under the data directory: `items.json` (the
//! slot list) and `history.json` (selection records). Reads degrade to
//! nothing on any failure; writes are fire-and-forget. There is no
//! atomicity across the two blobs.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::state::SelectionRecord;

const ITEMS_BLOB: &str = "items.json";
const HISTORY_BLOB: &str = "history.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed blob: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Handle on the data directory holding both blobs.
#[derive(Debug, Clone)]
pub struct WheelStore {
    data_dir: PathBuf,
}

impl WheelStore {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Saved slot list, or `None` when absent or unreadable. Failures are
    /// logged and never surfaced; the caller falls back to the default
    /// catalog.
    pub fn load_items(&self) -> Option<Vec<String>> {
        self.load_blob(ITEMS_BLOB)
    }

    /// Saved selection history, or `None` when absent or unreadable.
    pub fn load_history(&self) -> Option<Vec<SelectionRecord>> {
        self.load_blob(HISTORY_BLOB)
    }

    /// Fire-and-forget write of the slot list.
    pub fn save_items(&self, items: &[String]) {
        self.save_blob(ITEMS_BLOB, &items);
    }

    /// Fire-and-forget write of the history.
    pub fn save_history(&self, history: &[SelectionRecord]) {
        self.save_blob(HISTORY_BLOB, &history);
    }

    fn load_blob<T: serde::de::DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.data_dir.join(name);
        if !path.exists() {
            debug!("No saved blob at {:?}", path);
            return None;
        }
        match read_blob(&path) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring unreadable blob {:?}: {}", path, e);
                None
            }
        }
    }

    fn save_blob<T: serde::Serialize>(&self, name: &str, value: &T) {
        let path = self.data_dir.join(name);
        if let Err(e) = write_blob(&path, value) {
            warn!("Failed to persist {:?}: {}", path, e);
        }
    }
}

fn read_blob<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_blob<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(tag: &str) -> WheelStore {
        let dir = std::env::temp_dir()
            .join("fortune_wheel_tests")
            .join(format!("{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        WheelStore::new(dir)
    }

    #[test]
    fn test_missing_blobs_load_as_none() {
        let store = scratch_store("missing");
        assert!(store.load_items().is_none());
        assert!(store.load_history().is_none());
    }

    #[test]
    fn test_saved_items_come_back() {
        let store = scratch_store("items");
        let items = vec!["A".to_string(), "B".to_string()];
        store.save_items(&items);
        assert_eq!(store.load_items(), Some(items));
    }

    #[test]
    fn test_history_blob_keeps_original_key_names() {
        let records = vec![SelectionRecord {
            item: "Putter".to_string(),
            was_removed: true,
        }];
        let json = serde_json::to_string(&records).unwrap();
        assert!(json.contains("\"wasRemoved\":true"));
        assert!(json.contains("\"item\":\"Putter\""));
    }

    #[test]
    fn test_malformed_blob_falls_back_to_none() {
        let store = scratch_store("malformed");
        fs::create_dir_all(&store.data_dir).unwrap();
        fs::write(store.data_dir.join(ITEMS_BLOB), "not json at all").unwrap();
        assert!(store.load_items().is_none());
    }

    #[test]
    fn test_blobs_are_independent() {
        let store = scratch_store("independent");
        store.save_items(&["A".to_string()]);
        // items present, history still missing
        assert!(store.load_items().is_some());
        assert!(store.load_history().is_none());
    }
}

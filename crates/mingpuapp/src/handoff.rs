//! # Hand-off Records
//!
//! Opening a detail view or starting a comparison hands a small JSON record to whatever
//! renders the next screen. The core only writes these records; [`HandoffStore::get`]
//! exists for those consumers and for tests.
//!
//! | Key | Record |
//! |-----|--------|
//! | `selected_name` | the full catalog entry |
//! | `compare_list` | array of selected ids, in selection order |
//!
//! Each `put` overwrites the previous record under the same key.

use crate::error::{MingpuError, Result};
use crate::model::CatalogEntry;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffKey {
    SelectedName,
    CompareList,
}

impl HandoffKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandoffKey::SelectedName => "selected_name",
            HandoffKey::CompareList => "compare_list",
        }
    }
}

impl fmt::Display for HandoffKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value storage for serialized hand-off records.
///
/// Methods take `&self`; implementations that buffer in memory use interior mutability.
pub trait HandoffStore {
    fn put(&self, key: HandoffKey, json: &str) -> Result<()>;
    fn get(&self, key: HandoffKey) -> Result<Option<String>>;
}

/// Serialize `entry` under [`HandoffKey::SelectedName`].
pub fn publish_detail<H: HandoffStore + ?Sized>(store: &H, entry: &CatalogEntry) -> Result<()> {
    let json = serde_json::to_string(entry)?;
    store.put(HandoffKey::SelectedName, &json)
}

/// Serialize `ids` under [`HandoffKey::CompareList`].
pub fn publish_comparison<H: HandoffStore + ?Sized>(store: &H, ids: &[u32]) -> Result<()> {
    let json = serde_json::to_string(ids)?;
    store.put(HandoffKey::CompareList, &json)
}

/// One `<key>.json` file per key inside a directory, created on first write.
pub struct FileHandoff {
    dir: PathBuf,
}

impl FileHandoff {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: HandoffKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl HandoffStore for FileHandoff {
    fn put(&self, key: HandoffKey, json: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(MingpuError::Io)?;
        }
        let path = self.path_for(key);
        fs::write(&path, json).map_err(MingpuError::Io)?;
        tracing::debug!(key = %key, path = %path.display(), "hand-off record written");
        Ok(())
    }

    fn get(&self, key: HandoffKey) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path).map(Some).map_err(MingpuError::Io)
    }
}

/// In-memory hand-off store.
#[derive(Default)]
pub struct InMemoryHandoff {
    records: RefCell<HashMap<HandoffKey, String>>,
}

impl InMemoryHandoff {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HandoffStore for InMemoryHandoff {
    fn put(&self, key: HandoffKey, json: &str) -> Result<()> {
        self.records.borrow_mut().insert(key, json.to_string());
        Ok(())
    }

    fn get(&self, key: HandoffKey) -> Result<Option<String>> {
        Ok(self.records.borrow().get(&key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_entry;

    #[test]
    fn detail_record_round_trips_full_entry() {
        let store = InMemoryHandoff::new();
        let entry = fallback_entry();
        publish_detail(&store, &entry).unwrap();

        let json = store.get(HandoffKey::SelectedName).unwrap().unwrap();
        let back: CatalogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn comparison_record_is_id_array() {
        let store = InMemoryHandoff::new();
        publish_comparison(&store, &[3, 1]).unwrap();
        assert_eq!(
            store.get(HandoffKey::CompareList).unwrap().as_deref(),
            Some("[3,1]")
        );
        assert_eq!(store.get(HandoffKey::SelectedName).unwrap(), None);
    }

    #[test]
    fn file_store_writes_one_file_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHandoff::new(dir.path().join("handoff"));

        assert_eq!(store.get(HandoffKey::CompareList).unwrap(), None);
        publish_comparison(&store, &[1, 2]).unwrap();
        publish_comparison(&store, &[2, 5, 9]).unwrap();

        let path = dir.path().join("handoff").join("compare_list.json");
        assert_eq!(fs::read_to_string(path).unwrap(), "[2,5,9]");
        assert_eq!(
            store.get(HandoffKey::CompareList).unwrap().as_deref(),
            Some("[2,5,9]")
        );
    }
}

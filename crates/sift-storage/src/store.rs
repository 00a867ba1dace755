//! Persisted filter state

use serde_json::{Map, Value};
use sift_core::FilterQuery;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Key under which the serialized query lives in the state file.
const FILTERS_KEY: &str = "filters";

/// File-backed store for the active filter query.
///
/// The file holds one JSON object mapping keys to values so unrelated
/// state can share it later without a format change.
pub struct FilterStore {
    path: PathBuf,
}

impl FilterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform state file location (`.../sift/state.json`), if the
    /// platform exposes a data directory.
    pub fn default_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "sift")?;
        Some(dirs.data_dir().join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted query. Never errors outward: a missing file,
    /// unreadable bytes, bad JSON, a missing key or a malformed query all
    /// normalize to `None` so callers can fall back to defaults.
    pub fn load(&self) -> Option<FilterQuery> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!("no persisted filters at {}: {err}", self.path.display());
                return None;
            }
        };
        let root: Value = match serde_json::from_str(&text) {
            Ok(root) => root,
            Err(err) => {
                tracing::debug!("persisted filter state is not valid JSON: {err}");
                return None;
            }
        };
        let entry = root.get(FILTERS_KEY)?.clone();
        match serde_json::from_value(entry) {
            Ok(query) => Some(query),
            Err(err) => {
                tracing::debug!("persisted filter query is malformed: {err}");
                None
            }
        }
    }

    /// Write the query under the `"filters"` key, preserving any other
    /// keys already in the file. Creates parent directories as needed.
    pub async fn save(&self, query: &FilterQuery) -> Result<()> {
        let mut root = self.read_map();
        root.insert(FILTERS_KEY.to_string(), serde_json::to_value(query)?);
        self.write_map(root).await
    }

    /// Remove the persisted query, leaving other keys intact.
    pub async fn clear(&self) -> Result<()> {
        let mut root = self.read_map();
        root.remove(FILTERS_KEY);
        self.write_map(root).await
    }

    fn read_map(&self) -> Map<String, Value> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }

    async fn write_map(&self, root: Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(root))?;
        tokio::fs::write(&self.path, text).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::SortKey;

    fn temp_store() -> (tempfile::TempDir, FilterStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FilterStore::new(dir.path().join("state.json"));
        (dir, store)
    }

    #[tokio::test]
    async fn test_round_trip() {
        let (_dir, store) = temp_store();
        let query = FilterQuery {
            brand: "sony".to_string(),
            category: "Electronics".to_string(),
            max_price: "250".to_string(),
            max_rating: "".to_string(),
            sort: SortKey::PriceAsc,
        };
        store.save(&query).await.unwrap();
        assert_eq!(store.load(), Some(query));
    }

    #[test]
    fn test_missing_file_loads_absent() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_absent() {
        let (_dir, store) = temp_store();
        tokio::fs::write(store.path(), "{not json").await.unwrap();
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_malformed_query_loads_absent() {
        let (_dir, store) = temp_store();
        tokio::fs::write(store.path(), r#"{"filters": {"sortBy": 42}}"#)
            .await
            .unwrap();
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_missing_key_loads_absent() {
        let (_dir, store) = temp_store();
        tokio::fs::write(store.path(), r#"{"other": 1}"#).await.unwrap();
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_save_preserves_unrelated_keys() {
        let (_dir, store) = temp_store();
        tokio::fs::write(store.path(), r#"{"other": 1}"#).await.unwrap();
        store.save(&FilterQuery::default()).await.unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        let root: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(root["other"], 1);
        assert!(root.get(FILTERS_KEY).is_some());
    }

    #[tokio::test]
    async fn test_clear_removes_filters() {
        let (_dir, store) = temp_store();
        store.save(&FilterQuery::default()).await.unwrap();
        assert!(store.load().is_some());
        store.clear().await.unwrap();
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilterStore::new(dir.path().join("nested/deeper/state.json"));
        store.save(&FilterQuery::default()).await.unwrap();
        assert!(store.load().is_some());
    }
}

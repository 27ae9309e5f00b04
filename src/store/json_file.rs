//! # JSON File Store
//!
//! A map store kept as a single JSON array on disk.

use super::MapStore;
use crate::{MapDocument, TowerforgeError, TowerforgeResult};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Map store backed by a JSON file holding an array of map documents.
///
/// Every operation re-reads the file, so edits made by other processes
/// between calls are picked up. Appends rewrite the whole file through a
/// temporary sibling and a rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileMapStore {
    path: PathBuf,
}

impl JsonFileMapStore {
    /// Opens an existing store file.
    ///
    /// # Errors
    ///
    /// Returns [`TowerforgeError::StoreMissing`] if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> TowerforgeResult<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(TowerforgeError::StoreMissing(path));
        }
        Ok(Self { path })
    }

    /// Opens a store file, creating it with an empty array if it does not exist.
    pub fn open_or_create(path: impl Into<PathBuf>) -> TowerforgeResult<Self> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, "[]")?;
            debug!("Created empty map store at {}", path.display());
        }
        Self::open(path)
    }

    /// Gets the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> TowerforgeResult<Vec<MapDocument>> {
        let text = fs::read_to_string(&self.path)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;

        if !value.is_array() {
            return Err(TowerforgeError::StoreFormat(format!(
                "{} should hold a JSON array of maps",
                self.path.display()
            )));
        }

        Ok(serde_json::from_value(value)?)
    }

    fn write_all(&self, maps: &[MapDocument]) -> TowerforgeResult<()> {
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, serde_json::to_string_pretty(maps)?)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl MapStore for JsonFileMapStore {
    fn append(&mut self, map: MapDocument) -> TowerforgeResult<()> {
        let mut maps = self.read_all()?;
        debug!(
            "Appending map {} to {} ({} stored)",
            map.id,
            self.path.display(),
            maps.len()
        );
        maps.push(map);
        self.write_all(&maps)
    }

    fn list(&self) -> TowerforgeResult<Vec<MapDocument>> {
        self.read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("maps.json");

        match JsonFileMapStore::open(&missing) {
            Err(TowerforgeError::StoreMissing(path)) => assert_eq!(path, missing),
            other => panic!("expected StoreMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_open_or_create_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("maps.json");

        let store = JsonFileMapStore::open_or_create(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_non_array_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maps.json");
        fs::write(&path, r#"{"maps": []}"#).unwrap();

        let store = JsonFileMapStore::open(&path).unwrap();
        assert!(matches!(store.list(), Err(TowerforgeError::StoreFormat(_))));
    }

    #[test]
    fn test_malformed_json_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maps.json");
        fs::write(&path, "[{").unwrap();

        let store = JsonFileMapStore::open(&path).unwrap();
        assert!(matches!(store.list(), Err(TowerforgeError::Serde(_))));
    }
}

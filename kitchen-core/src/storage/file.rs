//! File-backed storage backend
//!
//! Emulates `localStorage` for the CLI: every key lives in one JSON object
//! (`local_storage.json`) under the work dir. The whole file is rewritten on
//! each write through a temp file + rename.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageResult};

const FILE_NAME: &str = "local_storage.json";

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Open (and create) the storage directory
    pub fn open(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                // a damaged file behaves like cleared site data
                tracing::warn!(path = %self.path.display(), error = %e, "Storage file corrupt, starting empty");
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, map: &BTreeMap<String, String>) -> StorageResult<()> {
        let raw = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut map = self.load()?;
        if map.remove(key).is_some() {
            self.save(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path()).unwrap();
        store.put("moms_cart", "{}").unwrap();
        store.put("moms_orders", "[]").unwrap();

        let reopened = FileStorage::open(dir.path()).unwrap();
        assert_eq!(reopened.get("moms_cart").unwrap().as_deref(), Some("{}"));

        reopened.remove("moms_cart").unwrap();
        assert_eq!(store.get("moms_cart").unwrap(), None);
        assert_eq!(store.get("moms_orders").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path()).unwrap();
        fs::write(store.path(), "garbage").unwrap();

        assert_eq!(store.get("moms_cart").unwrap(), None);
        // writing replaces the damaged file
        store.put("moms_cart", "{}").unwrap();
        assert_eq!(store.get("moms_cart").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_open_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStorage::open(&nested).unwrap();
        store.put("k", "v").unwrap();
        assert!(nested.join(FILE_NAME).exists());
    }
}

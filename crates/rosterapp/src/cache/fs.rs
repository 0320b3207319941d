use super::{Cache, CacheEntry};
use crate::error::{Result, RosterError};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

pub const CACHE_FILENAME: &str = "cache.json";

/// Cache kept in `cache.json` next to the records, so entries outlive one invocation.
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(CACHE_FILENAME)
    }

    fn load(&self) -> Result<HashMap<String, CacheEntry>> {
        let path = self.path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| cache_error(&path, e))?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&content).map_err(|e| cache_error(&path, e))
    }

    fn save(&self, entries: &HashMap<String, CacheEntry>) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| cache_error(&self.root, e))?;

        let path = self.path();
        let content = serde_json::to_string_pretty(entries)?;
        let tmp_file = self.root.join(format!(".cache-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(|e| cache_error(&tmp_file, e))?;
        fs::rename(&tmp_file, &path).map_err(|e| cache_error(&path, e))?;
        Ok(())
    }
}

fn cache_error(path: &Path, err: impl std::fmt::Display) -> RosterError {
    RosterError::Cache(format!("{}: {}", path.display(), err))
}

impl Cache for FileCache {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self
            .load()?
            .remove(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value))
    }

    fn set_with_expiry(&self, key: &str, value: Value, ttl: Duration) -> Result<()> {
        let mut entries = self.load().unwrap_or_default();
        entries.retain(|_, entry| !entry.is_expired());
        entries.insert(key.to_string(), CacheEntry::new(value, ttl)?);
        self.save(&entries)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }

    fn invalidate_all(&self) -> Result<()> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(cache_error(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn entries_survive_a_new_handle() {
        let temp = tempdir().unwrap();
        FileCache::new(temp.path().to_path_buf())
            .set_with_expiry("all_customers", json!(["a"]), TTL)
            .unwrap();

        let reopened = FileCache::new(temp.path().to_path_buf());
        assert_eq!(reopened.get("all_customers").unwrap(), Some(json!(["a"])));
    }

    #[test]
    fn expired_entries_miss_and_are_pruned_on_write() {
        let temp = tempdir().unwrap();
        let cache = FileCache::new(temp.path().to_path_buf());
        cache.set_with_expiry("old", json!(1), Duration::ZERO).unwrap();
        assert_eq!(cache.get("old").unwrap(), None);

        cache.set_with_expiry("new", json!(2), TTL).unwrap();
        let raw = fs::read_to_string(cache.path()).unwrap();
        assert!(!raw.contains("\"old\""));
        assert!(raw.contains("\"new\""));
    }

    #[test]
    fn invalidate_removes_the_file() {
        let temp = tempdir().unwrap();
        let cache = FileCache::new(temp.path().to_path_buf());
        cache.set_with_expiry("k", json!(1), TTL).unwrap();
        assert!(cache.path().exists());

        cache.invalidate_all().unwrap();
        assert!(!cache.path().exists());
        // Nothing to remove is fine
        cache.invalidate_all().unwrap();
    }

    #[test]
    fn corrupt_file_is_a_cache_error_and_is_replaced_on_write() {
        let temp = tempdir().unwrap();
        let cache = FileCache::new(temp.path().to_path_buf());
        fs::write(cache.path(), "{not json").unwrap();

        assert!(matches!(cache.get("k"), Err(RosterError::Cache(_))));

        cache.set_with_expiry("k", json!(3), TTL).unwrap();
        assert_eq!(cache.get("k").unwrap(), Some(json!(3)));
    }

    #[test]
    fn delete_single_key() {
        let temp = tempdir().unwrap();
        let cache = FileCache::new(temp.path().to_path_buf());
        cache.set_with_expiry("a", json!(1), TTL).unwrap();
        cache.set_with_expiry("b", json!(2), TTL).unwrap();

        cache.delete("a").unwrap();
        assert_eq!(cache.get("a").unwrap(), None);
        assert_eq!(cache.get("b").unwrap(), Some(json!(2)));
    }
}

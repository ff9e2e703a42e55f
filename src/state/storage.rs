use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{MealError, Result};

/// Minimal asynchronous key-value store, one string value per key.
#[async_trait]
pub trait SlotStorage: Send + Sync + fmt::Debug {
    /// Read a slot; `None` when nothing was ever written.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Slots stored as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the file backing a slot.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl SlotStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.slot_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        // Write beside the slot, then rename over it.
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

/// In-process storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    slots: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one slot.
    pub fn with_item(key: &str, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.inner.lock().slots.insert(key.to_string(), value.into());
        storage
    }

    /// Number of successful `set_item` calls.
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }

    /// Current raw value of a slot.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.lock().slots.get(key).cloned()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.lock().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.lock().fail_writes = fail;
    }
}

#[async_trait]
impl SlotStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let inner = self.inner.lock();
        if inner.fail_reads {
            return Err(MealError::Storage(format!("read of '{}' refused", key)));
        }
        Ok(inner.slots.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.fail_writes {
            return Err(MealError::Storage(format!("write of '{}' refused", key)));
        }
        inner.slots.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_storage_missing_slot_is_none() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get_item("meals").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_creates_dir_and_overwrites() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        storage.set_item("meals", "[1]").await.unwrap();
        storage.set_item("meals", "[2]").await.unwrap();

        assert_eq!(storage.get_item("meals").await.unwrap().as_deref(), Some("[2]"));
        assert!(storage.slot_path("meals").exists());
    }

    #[tokio::test]
    async fn test_memory_storage_counts_writes() {
        let storage = MemoryStorage::new();
        storage.set_item("meals", "[]").await.unwrap();
        storage.set_item("meals", "[]").await.unwrap();
        assert_eq!(storage.write_count(), 2);
    }

    #[tokio::test]
    async fn test_memory_storage_failure_modes() {
        let storage = MemoryStorage::with_item("meals", "[]");
        storage.set_fail_reads(true);
        storage.set_fail_writes(true);

        assert!(storage.get_item("meals").await.is_err());
        assert!(storage.set_item("meals", "[]").await.is_err());
        assert_eq!(storage.write_count(), 0);
        assert_eq!(storage.peek("meals").as_deref(), Some("[]"));
    }
}

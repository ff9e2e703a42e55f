use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{EntryId, MealEntry};
use crate::tally::DEFAULT_SLOT;

use super::storage::SlotStorage;

/// Reads and writes the whole meal list as one JSON array in a single slot.
#[derive(Debug, Clone)]
pub struct MealGateway {
    storage: Arc<dyn SlotStorage>,
    slot: String,
}

impl MealGateway {
    pub fn new(storage: Arc<dyn SlotStorage>) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    pub fn with_slot(storage: Arc<dyn SlotStorage>, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Load all entries; an unwritten slot yields an empty list.
    ///
    /// Records sharing an id collapse into one (later record wins, first
    /// position kept).
    pub async fn load_all(&self) -> Result<Vec<MealEntry>> {
        let Some(content) = self.storage.get_item(&self.slot).await? else {
            return Ok(Vec::new());
        };

        let entries: Vec<MealEntry> = serde_json::from_str(&content)?;
        Ok(dedup_by_id(entries))
    }

    /// Serialize the full list and overwrite the slot.
    pub async fn save_all(&self, entries: &[MealEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.storage.set_item(&self.slot, &json).await
    }
}

fn dedup_by_id(entries: Vec<MealEntry>) -> Vec<MealEntry> {
    let mut position: HashMap<EntryId, usize> = HashMap::new();
    let mut deduped: Vec<MealEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        match position.get(&entry.id) {
            Some(&idx) => {
                tracing::warn!("Duplicate id '{}' in stored meals, keeping later record", entry.id);
                deduped[idx] = entry;
            }
            None => {
                position.insert(entry.id.clone(), deduped.len());
                deduped.push(entry);
            }
        }
    }

    deduped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_and_save_roundtrip() {
        let dir = tempdir().unwrap();
        let gateway = MealGateway::new(Arc::new(FileStorage::new(dir.path())));

        let entries = vec![
            MealEntry::new(EntryId::from("1"), "Oatmeal", "350", "Breakfast"),
            MealEntry::new(EntryId::from("2"), "Salad", "200", "Lunch"),
        ];
        gateway.save_all(&entries).await.unwrap();

        let reloaded = gateway.load_all().await.unwrap();
        assert_eq!(reloaded, entries);
    }

    #[tokio::test]
    async fn test_unwritten_slot_is_empty() {
        let gateway = MealGateway::new(Arc::new(MemoryStorage::new()));
        assert!(gateway.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_slot_is_an_error() {
        let storage = MemoryStorage::with_item(DEFAULT_SLOT, "{not json");
        let gateway = MealGateway::new(Arc::new(storage));
        assert!(gateway.load_all().await.is_err());
    }

    #[tokio::test]
    async fn test_custom_slot() {
        let storage = Arc::new(MemoryStorage::new());
        let gateway = MealGateway::with_slot(storage.clone(), "tuesday");
        gateway.save_all(&[]).await.unwrap();

        assert_eq!(storage.peek("tuesday").as_deref(), Some("[]"));
        assert_eq!(storage.peek(DEFAULT_SLOT), None);
    }

    #[tokio::test]
    async fn test_deduplication() {
        let json = r#"[
            {"id": "1", "meal": "Soup", "calories": "150", "mealType": "Lunch"},
            {"id": "2", "meal": "Bread", "calories": "90", "mealType": "Lunch"},
            {"id": "1", "meal": "Stew", "calories": "400", "mealType": "Dinner"}
        ]"#;
        let gateway = MealGateway::new(Arc::new(MemoryStorage::with_item(DEFAULT_SLOT, json)));

        let entries = gateway.load_all().await.unwrap();
        assert_eq!(entries.len(), 2);
        // Later record wins, first position kept
        assert_eq!(entries[0].name, "Stew");
        assert_eq!(entries[1].name, "Bread");
    }
}

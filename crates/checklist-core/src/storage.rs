//! Persistence Layer
//!
//! Key-value storage seam plus the validated encoding of the item list.
//! The browser build backs [`KeyValueStore`] with `window.localStorage`.

use std::collections::{HashMap, HashSet};

use crate::error::{SchemaError, StorageError};
use crate::models::ChecklistItem;
use crate::seed::find_category;

/// Fixed entry names in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    pub title: &'static str,
    pub items: &'static str,
}

impl StorageKeys {
    pub const DEFAULT: StorageKeys = StorageKeys {
        title: "checklist-title",
        items: "checklist-items",
    };
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// String key-value store (localStorage shape)
pub trait KeyValueStore {
    /// Read an entry, `Ok(None)` when absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite an entry
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    /// Simulates a full or disabled backend
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every write is rejected
    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serialize items to the persisted JSON array
pub fn encode_items(items: &[ChecklistItem]) -> String {
    // A Vec of plain string/bool structs cannot fail to serialize
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Parse and validate a stored item list.
///
/// The whole payload is rejected on the first violation.
pub fn decode_items(raw: &str) -> Result<Vec<ChecklistItem>, SchemaError> {
    let items: Vec<ChecklistItem> =
        serde_json::from_str(raw).map_err(|e| SchemaError::Parse(e.to_string()))?;

    if items.is_empty() {
        return Err(SchemaError::Empty);
    }

    let mut seen = HashSet::new();
    for item in &items {
        if item.id.is_empty() {
            return Err(SchemaError::EmptyId);
        }
        if !seen.insert(item.id.as_str()) {
            return Err(SchemaError::DuplicateId(item.id.clone()));
        }
        if find_category(&item.category).is_none() {
            return Err(SchemaError::UnknownCategory {
                id: item.id.clone(),
                category: item.category.clone(),
            });
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_items;

    #[test]
    fn test_round_trip() {
        let mut items = default_items();
        items[4].checked = true;
        let decoded = decode_items(&encode_items(&items)).unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn test_reject_garbage() {
        assert!(matches!(decode_items("not json"), Err(SchemaError::Parse(_))));
        assert!(matches!(decode_items("{\"id\":\"1\"}"), Err(SchemaError::Parse(_))));
    }

    #[test]
    fn test_reject_missing_field() {
        let raw = r#"[{"id":"1","title":"t","description":"d","category":"setup"}]"#;
        assert!(matches!(decode_items(raw), Err(SchemaError::Parse(_))));
    }

    #[test]
    fn test_reject_wrong_type() {
        let raw = r#"[{"id":"1","title":"t","description":"d","category":"setup","checked":"yes"}]"#;
        assert!(matches!(decode_items(raw), Err(SchemaError::Parse(_))));
    }

    #[test]
    fn test_reject_empty_list() {
        assert_eq!(decode_items("[]"), Err(SchemaError::Empty));
    }

    #[test]
    fn test_reject_duplicate_id() {
        let raw = r#"[
            {"id":"1","title":"a","description":"","category":"setup","checked":false},
            {"id":"1","title":"b","description":"","category":"testing","checked":true}
        ]"#;
        assert_eq!(decode_items(raw), Err(SchemaError::DuplicateId("1".to_string())));
    }

    #[test]
    fn test_reject_empty_id() {
        let raw = r#"[{"id":"","title":"a","description":"","category":"setup","checked":false}]"#;
        assert_eq!(decode_items(raw), Err(SchemaError::EmptyId));
    }

    #[test]
    fn test_reject_unknown_category() {
        let raw = r#"[{"id":"1","title":"a","description":"","category":"marketing","checked":false}]"#;
        assert!(matches!(decode_items(raw), Err(SchemaError::UnknownCategory { .. })));
    }

    #[test]
    fn test_memory_storage_read_only() {
        let mut store = MemoryStorage::read_only();
        assert!(store.set("k", "v").is_err());
        assert_eq!(store.get("k").unwrap(), None);
    }
}

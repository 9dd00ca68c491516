//! Checklist Tracker
//!
//! State holder owning the document and its backing store.
//! Loads once on construction and writes the full aggregate after every mutation.

use crate::document::ChecklistDocument;
use crate::error::StorageError;
use crate::seed::{default_items, DEFAULT_TITLE};
use crate::storage::{decode_items, encode_items, KeyValueStore, StorageKeys};

#[derive(Debug, Clone)]
pub struct ChecklistTracker<S> {
    document: ChecklistDocument,
    storage: S,
    keys: StorageKeys,
    last_storage_error: Option<StorageError>,
}

impl<S: KeyValueStore> ChecklistTracker<S> {
    /// Load from `storage` using the default keys
    pub fn load(storage: S) -> Self {
        Self::load_with_keys(storage, StorageKeys::DEFAULT)
    }

    /// Load from `storage`, falling back to the built-in set entry by entry.
    ///
    /// Nothing is written back during load.
    pub fn load_with_keys(storage: S, keys: StorageKeys) -> Self {
        let mut last_storage_error = None;

        let title = match storage.get(keys.title) {
            Ok(Some(title)) => title,
            Ok(None) => DEFAULT_TITLE.to_string(),
            Err(e) => {
                log::warn!("[TRACKER] title unreadable, using default: {}", e);
                last_storage_error = Some(e);
                DEFAULT_TITLE.to_string()
            }
        };

        let items = match storage.get(keys.items) {
            Ok(Some(raw)) => decode_items(&raw).unwrap_or_else(|e| {
                log::warn!("[TRACKER] stored items rejected, using defaults: {}", e);
                default_items()
            }),
            Ok(None) => {
                log::debug!("[TRACKER] no stored items, using defaults");
                default_items()
            }
            Err(e) => {
                log::warn!("[TRACKER] items unreadable, using defaults: {}", e);
                last_storage_error = Some(e);
                default_items()
            }
        };

        Self {
            document: ChecklistDocument::new(title, items),
            storage,
            keys,
            last_storage_error,
        }
    }

    pub fn document(&self) -> &ChecklistDocument {
        &self.document
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Most recent storage failure, cleared by the next successful save
    pub fn last_storage_error(&self) -> Option<&StorageError> {
        self.last_storage_error.as_ref()
    }

    /// Flip one item and persist. Unknown ids change nothing.
    pub fn toggle_item(&mut self, id: &str) -> Option<bool> {
        let checked = self.document.toggle_item(id);
        match checked {
            Some(_) => self.save(),
            None => log::debug!("[TRACKER] toggle ignored, no item `{}`", id),
        }
        checked
    }

    /// Uncheck everything and persist. Callers confirm with the user first.
    pub fn reset_all(&mut self) {
        self.document.reset_all();
        self.save();
    }

    pub fn rename_title(&mut self, title: impl Into<String>) {
        self.document.rename_title(title);
        self.save();
    }

    pub fn overall_progress(&self) -> u32 {
        self.document.overall_progress()
    }

    pub fn category_progress(&self, category_id: &str) -> u32 {
        self.document.category_progress(category_id)
    }

    /// Write title and items as two independent entries.
    ///
    /// Failures are logged and kept in `last_storage_error`; memory state stays.
    fn save(&mut self) {
        let result = self
            .storage
            .set(self.keys.title, &self.document.title)
            .and_then(|_| self.storage.set(self.keys.items, &encode_items(&self.document.items)));

        match result {
            Ok(()) => self.last_storage_error = None,
            Err(e) => {
                log::warn!("[TRACKER] save failed, keeping in-memory state: {}", e);
                self.last_storage_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    /// Store whose reads always fail
    #[derive(Debug, Clone, Default)]
    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read { key: key.to_string(), message: "denied".to_string() })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("denied".to_string()))
        }
    }

    #[test]
    fn test_load_defaults_when_empty() {
        let tracker = ChecklistTracker::load(MemoryStorage::new());
        assert_eq!(tracker.document().title, DEFAULT_TITLE);
        assert_eq!(tracker.document().items.len(), 20);
        assert!(tracker.last_storage_error().is_none());
        // load does not write
        assert!(tracker.storage().raw("checklist-items").is_none());
    }

    #[test]
    fn test_toggle_persists_immediately() {
        let mut tracker = ChecklistTracker::load(MemoryStorage::new());
        tracker.toggle_item("1");
        let raw = tracker.storage().raw("checklist-items").unwrap();
        let stored = decode_items(raw).unwrap();
        assert!(stored[0].checked);
        assert_eq!(tracker.storage().raw("checklist-title"), Some(DEFAULT_TITLE));
    }

    #[test]
    fn test_toggle_unknown_does_not_write() {
        let mut tracker = ChecklistTracker::load(MemoryStorage::new());
        assert_eq!(tracker.toggle_item("999"), None);
        assert!(tracker.storage().raw("checklist-items").is_none());
    }

    #[test]
    fn test_broken_storage_degrades() {
        let mut tracker = ChecklistTracker::load(BrokenStorage);
        assert_eq!(tracker.document().items.len(), 20);
        assert!(tracker.last_storage_error().is_some());

        tracker.toggle_item("2");
        assert_eq!(tracker.overall_progress(), 5);
        assert!(matches!(tracker.last_storage_error(), Some(StorageError::Unavailable(_))));
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut tracker = ChecklistTracker::load(MemoryStorage::read_only());
        tracker.rename_title("Offline");
        assert_eq!(tracker.document().title, "Offline");
        assert!(tracker.last_storage_error().is_some());
    }

    #[test]
    fn test_custom_keys() {
        let keys = StorageKeys { title: "t", items: "i" };
        let mut tracker = ChecklistTracker::load_with_keys(MemoryStorage::new(), keys);
        tracker.rename_title("X");
        assert_eq!(tracker.storage().raw("t"), Some("X"));
        assert!(tracker.storage().raw("i").is_some());
    }
}

//! Tracker Scenario Tests
//!
//! End-to-end flows over the in-memory store and the recording writer.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::export::testing::RecordingWriter;
    use crate::{
        export_checklist, ChecklistTracker, ExportLayout, KeyValueStore, MemoryStorage, StorageKeys, CATEGORIES,
        DEFAULT_TITLE,
    };

    fn reload(tracker: ChecklistTracker<MemoryStorage>) -> ChecklistTracker<MemoryStorage> {
        ChecklistTracker::load(tracker.storage().clone())
    }

    #[test]
    fn test_setup_category_complete() {
        let mut tracker = ChecklistTracker::load(MemoryStorage::new());
        let setup_ids: Vec<String> = tracker
            .document()
            .items_in("setup")
            .map(|item| item.id.clone())
            .collect();
        assert_eq!(setup_ids.len(), 4);

        for id in &setup_ids {
            tracker.toggle_item(id);
        }

        assert_eq!(tracker.category_progress("setup"), 100);
        assert_eq!(tracker.overall_progress(), 20);
        for category in CATEGORIES.iter().filter(|c| c.id != "setup") {
            assert_eq!(tracker.category_progress(category.id), 0);
        }
    }

    #[test]
    fn test_rename_survives_reload() {
        let mut tracker = ChecklistTracker::load(MemoryStorage::new());
        tracker.rename_title("My Plan");
        let reloaded = reload(tracker);
        assert_eq!(reloaded.document().title, "My Plan");
    }

    #[test]
    fn test_empty_title_survives_reload() {
        let mut tracker = ChecklistTracker::load(MemoryStorage::new());
        tracker.rename_title("");
        let reloaded = reload(tracker);
        assert_eq!(reloaded.document().title, "");
    }

    #[test]
    fn test_state_round_trip() {
        let mut tracker = ChecklistTracker::load(MemoryStorage::new());
        tracker.rename_title("Релиз 2.0");
        tracker.toggle_item("5");
        tracker.toggle_item("17");
        let before = tracker.document().clone();

        let reloaded = reload(tracker);
        assert_eq!(reloaded.document(), &before);
    }

    #[test]
    fn test_reset_then_progress_is_zero() {
        let mut tracker = ChecklistTracker::load(MemoryStorage::new());
        for id in ["1", "6", "9", "20"] {
            tracker.toggle_item(id);
        }
        assert!(tracker.overall_progress() > 0);

        tracker.reset_all();
        assert_eq!(tracker.overall_progress(), 0);
        assert_eq!(reload(tracker).overall_progress(), 0);
    }

    #[test]
    fn test_corrupt_items_fall_back_but_title_kept() {
        let keys = StorageKeys::DEFAULT;
        let storage = MemoryStorage::new()
            .with_entry(keys.title, "Сохранённый")
            .with_entry(keys.items, "{broken");
        let tracker = ChecklistTracker::load(storage);

        assert_eq!(tracker.document().title, "Сохранённый");
        assert_eq!(tracker.document().items.len(), 20);
        // The bad entry stays until the next mutation overwrites it
        assert_eq!(tracker.storage().get(keys.items).unwrap().as_deref(), Some("{broken"));
    }

    #[test]
    fn test_unknown_category_wipes_whole_payload() {
        let keys = StorageKeys::DEFAULT;
        let raw = r#"[
            {"id":"1","title":"ok","description":"","category":"setup","checked":true},
            {"id":"2","title":"bad","description":"","category":"sales","checked":true}
        ]"#;
        let tracker = ChecklistTracker::load(MemoryStorage::new().with_entry(keys.items, raw));
        assert_eq!(tracker.document().title, DEFAULT_TITLE);
        assert_eq!(tracker.overall_progress(), 0);
        assert_eq!(tracker.document().items.len(), 20);
    }

    #[test]
    fn test_export_default_set_first_page() {
        let tracker = ChecklistTracker::load(MemoryStorage::new());
        let mut writer = RecordingWriter::default();
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let summary = export_checklist(tracker.document(), &mut writer, &ExportLayout::default(), date).unwrap();

        assert_eq!(summary.filename, "checklist-2025-01-31.pdf");
        let first_page: Vec<String> = writer
            .page_texts(1)
            .into_iter()
            .flat_map(|t| t.lines.clone())
            .collect();
        assert!(first_page.contains(&DEFAULT_TITLE.to_string()));
        assert!(first_page.contains(&"Дата: 31.01.2025".to_string()));
        assert!(first_page.contains(&"Общий прогресс: 0%".to_string()));
    }
}

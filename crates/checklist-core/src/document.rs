//! Checklist Document
//!
//! The persisted aggregate (title + ordered items) and its pure operations.

use crate::models::ChecklistItem;
use crate::seed::{default_items, DEFAULT_TITLE};

/// Rounded percentage, 0 when `total` is 0
pub fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * done as f64 / total as f64).round() as u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistDocument {
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

impl Default for ChecklistDocument {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE.to_string(), default_items())
    }
}

impl ChecklistDocument {
    pub fn new(title: String, items: Vec<ChecklistItem>) -> Self {
        Self { title, items }
    }

    /// Flip the completion flag of `id`.
    ///
    /// Returns the new flag, or `None` if no item has that id.
    pub fn toggle_item(&mut self, id: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    /// Uncheck every item
    pub fn reset_all(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }

    /// Replace the title. Empty titles are accepted as-is.
    pub fn rename_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn overall_progress(&self) -> u32 {
        percent(self.completed_count(), self.items.len())
    }

    /// Items of `category_id` in declared order
    pub fn items_in<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a ChecklistItem> + 'a {
        self.items.iter().filter(move |item| item.category == category_id)
    }

    /// Progress restricted to one category, 0 for an empty category
    pub fn category_progress(&self, category_id: &str) -> u32 {
        let (done, total) = self
            .items_in(category_id)
            .fold((0, 0), |(done, total), item| (done + item.checked as usize, total + 1));
        percent(done, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(checked: &[bool]) -> ChecklistDocument {
        let items = checked
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let mut item = ChecklistItem::new(&i.to_string(), "t", "d", "setup");
                item.checked = c;
                item
            })
            .collect();
        ChecklistDocument::new("T".to_string(), items)
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(4, 20), 20);
    }

    #[test]
    fn test_overall_progress_bounds() {
        for n in 0..=6 {
            for mask in 0u32..(1 << n) {
                let flags: Vec<bool> = (0..n).map(|b| mask & (1 << b) != 0).collect();
                let doc = doc_with(&flags);
                let p = doc.overall_progress();
                assert!(p <= 100);
                if n > 0 {
                    assert_eq!(p == 100, flags.iter().all(|&c| c));
                    assert_eq!(p == 0, flags.iter().all(|&c| !c));
                }
            }
        }
    }

    #[test]
    fn test_empty_document_progress() {
        let doc = ChecklistDocument::new(String::new(), Vec::new());
        assert_eq!(doc.overall_progress(), 0);
        assert_eq!(doc.category_progress("setup"), 0);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut doc = ChecklistDocument::default();
        let before = doc.clone();
        assert_eq!(doc.toggle_item("3"), Some(true));
        assert_eq!(doc.toggle_item("3"), Some(false));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut doc = ChecklistDocument::default();
        let before = doc.clone();
        assert_eq!(doc.toggle_item("nope"), None);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_reset_all() {
        let mut doc = doc_with(&[true, true, false]);
        doc.reset_all();
        assert_eq!(doc.overall_progress(), 0);
        assert_eq!(doc.completed_count(), 0);
    }

    #[test]
    fn test_rename_accepts_empty() {
        let mut doc = ChecklistDocument::default();
        doc.rename_title("");
        assert_eq!(doc.title, "");
    }

    #[test]
    fn test_category_progress_unknown_category() {
        let doc = ChecklistDocument::default();
        assert_eq!(doc.category_progress("does-not-exist"), 0);
    }
}

//! Checklist Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the tracker
//! and the transient page flags.

use checklist_core::{export_checklist, ChecklistTracker, ExportError, ExportLayout, ExportSummary};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::bindings::{self, BrowserStorage, JsPdfWriter};

/// Checklist page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct ChecklistState {
    /// Title, items and their localStorage backing
    pub tracker: ChecklistTracker<BrowserStorage>,
    /// Title input is shown instead of the heading
    pub editing_title: bool,
    /// Mobile category drawer is open
    pub menu_open: bool,
}

impl ChecklistState {
    /// Load the checklist from localStorage
    pub fn load() -> Self {
        let tracker = ChecklistTracker::load(BrowserStorage);
        log::info!(
            "[CHECKLIST] loaded \"{}\" with {} items ({}%)",
            tracker.document().title,
            tracker.document().items.len(),
            tracker.overall_progress()
        );
        Self {
            tracker,
            editing_title: false,
            menu_open: false,
        }
    }
}

/// Type alias for the store
pub type ChecklistStore = Store<ChecklistState>;

/// Get the checklist store from context
pub fn use_checklist_store() -> ChecklistStore {
    expect_context::<ChecklistStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip one item and persist
pub fn store_toggle_item(store: &ChecklistStore, id: &str) {
    store.tracker().write().toggle_item(id);
}

/// Uncheck every item and persist. Call only after the user confirmed.
pub fn store_reset_all(store: &ChecklistStore) {
    store.tracker().write().reset_all();
    log::info!("[CHECKLIST] progress reset");
}

/// Start editing the title
pub fn store_begin_title_edit(store: &ChecklistStore) {
    *store.editing_title().write() = true;
}

/// Commit a title edit and leave edit mode. Ignored when not editing.
pub fn store_rename_title(store: &ChecklistStore, title: String) {
    if !store.editing_title().get_untracked() {
        return;
    }
    store.tracker().write().rename_title(title);
    *store.editing_title().write() = false;
}

/// Leave edit mode without changing the title
pub fn store_cancel_title_edit(store: &ChecklistStore) {
    *store.editing_title().write() = false;
}

pub fn store_set_menu_open(store: &ChecklistStore, open: bool) {
    *store.menu_open().write() = open;
}

/// A saved export and whether its text used the embedded Unicode font
pub struct ExportReport {
    pub summary: ExportSummary,
    pub unicode_font: bool,
}

/// Render the current checklist to a PDF download
pub fn store_export(store: &ChecklistStore) -> Result<ExportReport, ExportError> {
    let date = bindings::today().ok_or_else(|| ExportError::Render("invalid system date".to_string()))?;
    let mut writer = JsPdfWriter::new()?;
    let tracker = store.tracker().read_untracked();
    let summary = export_checklist(tracker.document(), &mut writer, &ExportLayout::default(), date)?;
    Ok(ExportReport {
        summary,
        unicode_font: writer.has_unicode_font(),
    })
}

//! Checklist Models
//!
//! Data structures shared by the tracker, storage and export.

use serde::{Deserialize, Serialize};

/// A single task in the checklist (persisted shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecklistItem {
    /// Unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    /// Category identifier, must match one of [`crate::CATEGORIES`]
    pub category: String,
    /// Completion flag
    pub checked: bool,
}

impl ChecklistItem {
    /// Create an unchecked item
    pub fn new(id: &str, title: &str, description: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            checked: false,
        }
    }

    /// Checkbox glyph used in exports
    pub fn checkbox(&self) -> &'static str {
        if self.checked {
            "[✓]"
        } else {
            "[ ]"
        }
    }
}

/// Static task category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon name, rendered by the UI
    pub icon: &'static str,
    /// Color token, e.g. "blue"
    pub color: &'static str,
}

impl Category {
    /// In-page anchor for this category's section
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

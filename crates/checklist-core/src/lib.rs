//! Checklist Core
//!
//! Browser-independent logic for the checklist tracker: the item model,
//! the built-in seed set, progress computation, persistence with schema
//! validation and the paginated export layout.

mod models;
mod seed;
mod document;
mod storage;
mod tracker;
mod export;
mod error;

#[cfg(test)]
mod tests;

pub use models::{Category, ChecklistItem};
pub use seed::{default_items, find_category, CATEGORIES, DEFAULT_TITLE};
pub use document::{percent, ChecklistDocument};
pub use storage::{decode_items, encode_items, KeyValueStore, MemoryStorage, StorageKeys};
pub use tracker::ChecklistTracker;
pub use export::{
    export_checklist, export_filename, DocumentWriter, ExportLayout, ExportSummary, FontWeight, TextAlign, TextColor,
};
pub use error::{ExportError, SchemaError, StorageError};

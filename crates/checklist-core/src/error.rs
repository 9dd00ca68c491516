//! Checklist Errors

/// Local storage backend failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read `{key}`: {message}")]
    Read { key: String, message: String },

    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
}

/// Stored item payload rejected by validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("malformed items payload: {0}")]
    Parse(String),

    #[error("stored item list is empty")]
    Empty,

    #[error("item with empty id")]
    EmptyId,

    #[error("duplicate item id `{0}`")]
    DuplicateId(String),

    #[error("item `{id}` references unknown category `{category}`")]
    UnknownCategory { id: String, category: String },
}

/// Export generation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("document writer unavailable: {0}")]
    Unavailable(String),

    #[error("failed to render document: {0}")]
    Render(String),

    #[error("failed to save `{filename}`: {message}")]
    Save { filename: String, message: String },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Could not determine a data directory. Please pass --data-dir.")]
    NoDataDir,
}

/// A pledge submission that cannot be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Please enter your name and choose an action.")]
    MissingName,

    #[error("Please enter your name and choose an action.")]
    MissingAction,
}

#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite storage failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Malformed ledger JSON: {0}")]
    Json(#[from] serde_json::Error),
}

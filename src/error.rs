use thiserror::Error;

/// Errors produced while loading a dataset.
///
/// Lookups never return these: a missing entity is an ordinary
/// [`Option::None`], not an error. Only the one-time load can fail.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be opened at the given path.
    #[error("{0}")]
    NotFound(String),

    /// The file was opened but its contents are not valid dataset JSON.
    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient result alias used across the crate.
pub type Result<T> = std::result::Result<T, LoadError>;

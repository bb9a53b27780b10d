use thiserror::Error;

/// Errors emitted while validating the navigation taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("path `{path}` is claimed by both `{first}` and `{second}`")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },
    #[error("cluster id `{0}` is declared more than once")]
    DuplicateCluster(String),
}

/// Errors emitted while parsing theme colors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

/// Errors emitted while reading or writing the key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage IO failed")]
    Io(#[from] std::io::Error),
    #[error("storage JSON failed")]
    Json(#[from] serde_json::Error),
    #[error("storage is unavailable")]
    Unavailable,
}

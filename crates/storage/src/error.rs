#![forbid(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage quota exceeded (limit={limit} bytes, needed={needed} bytes)")]
    QuotaExceeded { limit: usize, needed: usize },
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

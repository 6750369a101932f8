#![forbid(unsafe_code)]

use ld_core::gate::GateError;
use ld_core::ids::ItemId;
use ld_core::quiz::QuizError;
use ld_core::text::TextError;
use ld_storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] TextError),
    #[error("due date must look like YYYY-MM-DD (got {0:?})")]
    InvalidDueDate(String),
    #[error("unknown item {0}")]
    UnknownItem(ItemId),
    #[error("unknown product {0}")]
    UnknownProduct(ItemId),
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Import failures keep the store untouched; the message is what users see.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Invalid file format.")]
    InvalidFormat(#[source] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
}

#![forbid(unsafe_code)]

mod error;
mod kv;
mod list;

pub use error::StorageError;
pub use kv::{KvStore, MemoryKv, SqliteKv};
pub use list::{ListStore, Notice};

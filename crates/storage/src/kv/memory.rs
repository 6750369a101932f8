#![forbid(unsafe_code)]

use super::KvStore;
use crate::StorageError;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// In-process key-value slots.
///
/// Clones share the same slots, so a clone handed to a second controller
/// sees what the first one wrote (two "page loads" over one storage area).
#[derive(Clone, Debug, Default)]
pub struct MemoryKv {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the summed size of all keys and values, in bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            slots: Rc::default(),
            quota: Some(quota),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.slots.borrow().keys().cloned().collect()
    }

    fn used_without(&self, key: &str) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { limit, needed });
            }
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        Ok(self.slots.borrow_mut().remove(key).is_some())
    }
}

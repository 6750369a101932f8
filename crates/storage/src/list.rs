#![forbid(unsafe_code)]

use crate::{KvStore, StorageError};
use ld_core::ids::{IdAllocator, ItemId};
use ld_core::model::Record;
use std::collections::HashSet;

/// User-visible, non-fatal message raised by the store (e.g. a failed save).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ordered records mirrored into one key-value slot.
///
/// Loaded once at construction, written back in full after every applied
/// mutation. The in-memory sequence stays authoritative when a write fails;
/// the failure is logged and queued as a [`Notice`].
pub struct ListStore<T: Record> {
    key: String,
    items: Vec<T>,
    ids: IdAllocator,
    backend: Box<dyn KvStore>,
    revision: u64,
    notices: Vec<Notice>,
}

impl<T: Record> std::fmt::Debug for ListStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListStore")
            .field("key", &self.key)
            .field("len", &self.items.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl<T: Record> ListStore<T> {
    /// Reads the slot; a missing, `null` or unparseable value yields an empty list.
    pub fn load(backend: Box<dyn KvStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut notices = Vec::new();
        let items = match backend.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Option<Vec<T>>>(&raw) {
                Ok(items) => items.unwrap_or_default(),
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "stored list is corrupt; starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "could not read stored list; starting empty");
                notices.push(Notice::new(format!("Could not load saved data: {err}")));
                Vec::new()
            }
        };

        let mut store = Self {
            key,
            ids: IdAllocator::default(),
            items,
            backend,
            revision: 0,
            notices,
        };
        store.reseat_ids();
        store
    }

    /// Seeds the allocator and renumbers records whose id is missing (zero)
    /// or already taken, keeping identities unique.
    fn reseat_ids(&mut self) {
        self.ids = IdAllocator::starting_after(self.items.iter().map(|item| item.id()));
        let mut seen = HashSet::new();
        for index in 0..self.items.len() {
            let id = self.items[index].id();
            if id == ItemId::default() || !seen.insert(id) {
                let fresh = self.next_id();
                seen.insert(fresh);
                self.items[index].set_id(fresh);
            }
        }
    }

    /// Next allocator id; once the allocator is exhausted, the lowest id no
    /// record holds.
    fn next_id(&mut self) -> ItemId {
        if let Some(id) = self.ids.allocate() {
            return id;
        }
        let taken = self
            .items
            .iter()
            .map(|item| item.id())
            .collect::<HashSet<_>>();
        (1..=u64::MAX)
            .map(ItemId::new)
            .find(|id| !taken.contains(id))
            .unwrap_or_default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Bumped on every applied mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends `record` under a fresh id.
    pub fn push(&mut self, mut record: T) -> ItemId {
        let id = self.next_id();
        record.set_id(id);
        self.items.push(record);
        self.commit("push");
        id
    }

    /// Applies `edit` to the record with `id`. The id itself is kept.
    pub fn update(&mut self, id: ItemId, edit: impl FnOnce(&mut T)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        edit(item);
        item.set_id(id);
        self.commit("update");
        true
    }

    pub fn remove(&mut self, id: ItemId) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(index);
        self.commit("remove");
        Some(removed)
    }

    /// Keeps the records `keep` accepts; returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| keep(item));
        let removed = before - self.items.len();
        if removed > 0 {
            self.commit("retain");
        }
        removed
    }

    /// Appends every record under a fresh id; ids carried by the records are ignored.
    pub fn extend(&mut self, records: impl IntoIterator<Item = T>) -> usize {
        let before = self.items.len();
        for mut record in records {
            record.set_id(self.next_id());
            self.items.push(record);
        }
        let added = self.items.len() - before;
        if added > 0 {
            self.commit("extend");
        }
        added
    }

    pub fn clear(&mut self) -> usize {
        self.retain(|_| false)
    }

    pub fn to_json_pretty(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }

    /// Writes the whole sequence to the slot.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.items)?;
        self.backend.set(&self.key, &json)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn commit(&mut self, op: &'static str) {
        self.revision += 1;
        match self.persist() {
            Ok(()) => {
                tracing::debug!(key = %self.key, op, len = self.items.len(), "list persisted");
            }
            Err(err) => {
                tracing::warn!(key = %self.key, op, error = %err, "list not persisted");
                self.notices
                    .push(Notice::new(format!("Could not save changes: {err}")));
            }
        }
    }
}

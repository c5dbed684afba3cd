//! Container wrappers over the store's list/set/sorted-set primitives.
//!
//! Thin typed handles bound to one key. Strict pass-throughs: no migration,
//! no versioning, no encoding beyond the text the store already speaks. A
//! raw-hash wrapper is deliberately absent — the model layer is the hash
//! surface.

use crate::error::HashbaseResult;
use crate::model::RecordKey;
use crate::store::{ListStore, SetStore, SortedSetStore};

/// An ordered sequence of text values under one key.
pub struct List<'a, S: ListStore + ?Sized> {
    store: &'a S,
    key: RecordKey,
}

impl<'a, S: ListStore + ?Sized> List<'a, S> {
    pub fn new(store: &'a S, key: impl Into<RecordKey>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    /// Append to the tail.
    pub fn push(&self, value: &str) -> HashbaseResult<()> {
        self.store.list_push(&self.key, value)
    }

    /// Values between `start` and `stop` inclusive; negative indices count
    /// from the tail.
    pub fn range(&self, start: i64, stop: i64) -> HashbaseResult<Vec<String>> {
        self.store.list_range(&self.key, start, stop)
    }

    pub fn len(&self) -> HashbaseResult<usize> {
        self.store.list_len(&self.key)
    }

    pub fn is_empty(&self) -> HashbaseResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Unordered unique text members under one key.
pub struct Set<'a, S: SetStore + ?Sized> {
    store: &'a S,
    key: RecordKey,
}

impl<'a, S: SetStore + ?Sized> Set<'a, S> {
    pub fn new(store: &'a S, key: impl Into<RecordKey>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    /// Add a member; returns `false` if it was already present.
    pub fn add(&self, member: &str) -> HashbaseResult<bool> {
        self.store.set_add(&self.key, member)
    }

    /// Remove a member; returns whether it was present.
    pub fn remove(&self, member: &str) -> HashbaseResult<bool> {
        self.store.set_remove(&self.key, member)
    }

    pub fn contains(&self, member: &str) -> HashbaseResult<bool> {
        self.store.set_contains(&self.key, member)
    }

    pub fn members(&self) -> HashbaseResult<Vec<String>> {
        self.store.set_members(&self.key)
    }

    pub fn len(&self) -> HashbaseResult<usize> {
        self.store.set_len(&self.key)
    }

    pub fn is_empty(&self) -> HashbaseResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Unique text members ordered by a numeric score, under one key.
pub struct SortedSet<'a, S: SortedSetStore + ?Sized> {
    store: &'a S,
    key: RecordKey,
}

impl<'a, S: SortedSetStore + ?Sized> SortedSet<'a, S> {
    pub fn new(store: &'a S, key: impl Into<RecordKey>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    /// Insert a member with `score`, updating the score if already present.
    pub fn add(&self, member: &str, score: f64) -> HashbaseResult<()> {
        self.store.sorted_set_add(&self.key, member, score)
    }

    /// Members between rank `start` and `stop` inclusive, ascending by
    /// score; negative ranks count from the tail.
    pub fn range(&self, start: i64, stop: i64) -> HashbaseResult<Vec<(String, f64)>> {
        self.store.sorted_set_range(&self.key, start, stop)
    }

    /// The member's score, if present.
    pub fn score(&self, member: &str) -> HashbaseResult<Option<f64>> {
        self.store.sorted_set_score(&self.key, member)
    }

    pub fn len(&self) -> HashbaseResult<usize> {
        self.store.sorted_set_len(&self.key)
    }

    pub fn is_empty(&self) -> HashbaseResult<bool> {
        Ok(self.len()? == 0)
    }
}

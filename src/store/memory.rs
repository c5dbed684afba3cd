//! Shared in-memory store adapter.
//!
//! The reference implementation of the full store contract: a cheaply
//! cloneable handle over shared process memory, used by the test suite and
//! as the template for real network adapters. Clones share state, matching
//! the create-once-reuse lifecycle of a real connection.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use log::trace;

use crate::config::MemoryConfig;
use crate::error::{HashbaseError, HashbaseResult};
use crate::model::key::RecordKey;
use crate::store::{HashStore, ListStore, SetStore, SortedSetStore, StoredHash};

/// One key's container. A key holds exactly one container type at a time;
/// operations against the wrong type fail with
/// [`HashbaseError::WrongType`].
#[derive(Debug, Clone)]
enum Entry {
    Hash(StoredHash),
    List(Vec<String>),
    Set(BTreeSet<String>),
    /// Kept sorted by `(score, member)`.
    SortedSet(Vec<(String, f64)>),
}

/// In-memory store implementing every adapter trait.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<RecordKey, Entry>>>,
    max_entries: Option<usize>,
}

impl MemoryStore {
    /// Create a store with default configuration.
    pub fn new() -> Self {
        Self::with_config(MemoryConfig::default())
    }

    /// Create a store from an explicit configuration.
    pub fn with_config(config: MemoryConfig) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::with_capacity(config.initial_capacity))),
            max_entries: config.max_entries,
        }
    }

    /// Number of keys currently stored, across all container types.
    pub fn len(&self) -> HashbaseResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> HashbaseResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Drop every stored key.
    pub fn clear(&self) -> HashbaseResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn lock(&self) -> HashbaseResult<MutexGuard<'_, HashMap<RecordKey, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| HashbaseError::Store("memory store lock poisoned".to_string()))
    }

    fn check_capacity(
        &self,
        entries: &HashMap<RecordKey, Entry>,
        key: &RecordKey,
    ) -> HashbaseResult<()> {
        if let Some(max) = self.max_entries {
            if entries.len() >= max && !entries.contains_key(key) {
                return Err(HashbaseError::Store(format!(
                    "memory store is full ({max} entries)"
                )));
            }
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HashStore for MemoryStore {
    fn hash_write(&self, key: &RecordKey, fields: &StoredHash) -> HashbaseResult<()> {
        let mut entries = self.lock()?;
        self.check_capacity(&entries, key)?;
        trace!("hash_write '{}' ({} fields)", key, fields.len());
        entries.insert(key.clone(), Entry::Hash(fields.clone()));
        Ok(())
    }

    fn hash_read_all(&self, key: &RecordKey) -> HashbaseResult<Option<StoredHash>> {
        match self.lock()?.get(key) {
            Some(Entry::Hash(fields)) => Ok(Some(fields.clone())),
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "hash",
            }),
            None => Ok(None),
        }
    }

    fn delete(&self, key: &RecordKey) -> HashbaseResult<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }
}

impl ListStore for MemoryStore {
    fn list_push(&self, key: &RecordKey, value: &str) -> HashbaseResult<()> {
        let mut entries = self.lock()?;
        self.check_capacity(&entries, key)?;
        match entries
            .entry(key.clone())
            .or_insert_with(|| Entry::List(Vec::new()))
        {
            Entry::List(items) => {
                items.push(value.to_string());
                Ok(())
            }
            _ => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "list",
            }),
        }
    }

    fn list_range(&self, key: &RecordKey, start: i64, stop: i64) -> HashbaseResult<Vec<String>> {
        match self.lock()?.get(key) {
            Some(Entry::List(items)) => Ok(match normalize_range(items.len(), start, stop) {
                Some((start, stop)) => items[start..=stop].to_vec(),
                None => Vec::new(),
            }),
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "list",
            }),
            None => Ok(Vec::new()),
        }
    }

    fn list_len(&self, key: &RecordKey) -> HashbaseResult<usize> {
        match self.lock()?.get(key) {
            Some(Entry::List(items)) => Ok(items.len()),
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "list",
            }),
            None => Ok(0),
        }
    }
}

impl SetStore for MemoryStore {
    fn set_add(&self, key: &RecordKey, member: &str) -> HashbaseResult<bool> {
        let mut entries = self.lock()?;
        self.check_capacity(&entries, key)?;
        match entries
            .entry(key.clone())
            .or_insert_with(|| Entry::Set(BTreeSet::new()))
        {
            Entry::Set(members) => Ok(members.insert(member.to_string())),
            _ => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "set",
            }),
        }
    }

    fn set_remove(&self, key: &RecordKey, member: &str) -> HashbaseResult<bool> {
        match self.lock()?.get_mut(key) {
            Some(Entry::Set(members)) => Ok(members.remove(member)),
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "set",
            }),
            None => Ok(false),
        }
    }

    fn set_contains(&self, key: &RecordKey, member: &str) -> HashbaseResult<bool> {
        match self.lock()?.get(key) {
            Some(Entry::Set(members)) => Ok(members.contains(member)),
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "set",
            }),
            None => Ok(false),
        }
    }

    fn set_members(&self, key: &RecordKey) -> HashbaseResult<Vec<String>> {
        match self.lock()?.get(key) {
            Some(Entry::Set(members)) => Ok(members.iter().cloned().collect()),
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "set",
            }),
            None => Ok(Vec::new()),
        }
    }

    fn set_len(&self, key: &RecordKey) -> HashbaseResult<usize> {
        match self.lock()?.get(key) {
            Some(Entry::Set(members)) => Ok(members.len()),
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "set",
            }),
            None => Ok(0),
        }
    }
}

impl SortedSetStore for MemoryStore {
    fn sorted_set_add(&self, key: &RecordKey, member: &str, score: f64) -> HashbaseResult<()> {
        let mut entries = self.lock()?;
        self.check_capacity(&entries, key)?;
        match entries
            .entry(key.clone())
            .or_insert_with(|| Entry::SortedSet(Vec::new()))
        {
            Entry::SortedSet(members) => {
                members.retain(|(m, _)| m != member);
                let at = members.partition_point(|(m, s)| {
                    s.total_cmp(&score)
                        .then_with(|| m.as_str().cmp(member))
                        .is_lt()
                });
                members.insert(at, (member.to_string(), score));
                Ok(())
            }
            _ => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "sorted set",
            }),
        }
    }

    fn sorted_set_range(
        &self,
        key: &RecordKey,
        start: i64,
        stop: i64,
    ) -> HashbaseResult<Vec<(String, f64)>> {
        match self.lock()?.get(key) {
            Some(Entry::SortedSet(members)) => {
                Ok(match normalize_range(members.len(), start, stop) {
                    Some((start, stop)) => members[start..=stop].to_vec(),
                    None => Vec::new(),
                })
            }
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "sorted set",
            }),
            None => Ok(Vec::new()),
        }
    }

    fn sorted_set_score(&self, key: &RecordKey, member: &str) -> HashbaseResult<Option<f64>> {
        match self.lock()?.get(key) {
            Some(Entry::SortedSet(members)) => Ok(members
                .iter()
                .find(|(m, _)| m == member)
                .map(|(_, score)| *score)),
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "sorted set",
            }),
            None => Ok(None),
        }
    }

    fn sorted_set_len(&self, key: &RecordKey) -> HashbaseResult<usize> {
        match self.lock()?.get(key) {
            Some(Entry::SortedSet(members)) => Ok(members.len()),
            Some(_) => Err(HashbaseError::WrongType {
                key: key.clone(),
                expected: "sorted set",
            }),
            None => Ok(0),
        }
    }
}

/// Resolve an inclusive `(start, stop)` pair with tail-relative negative
/// indices into concrete bounds, or `None` when the range is empty.
fn normalize_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let resolve = |index: i64| {
        if index < 0 {
            index + len as i64
        } else {
            index
        }
    };
    let start = resolve(start).max(0);
    let stop = resolve(stop).min(len as i64 - 1);
    if start > stop {
        return None;
    }
    Some((start as usize, stop as usize))
}

//! Store adapter contracts.
//!
//! The wire contract the mapping layer requires from a backing store, split
//! by container kind: [`HashStore`] backs the model layer, and
//! [`ListStore`]/[`SetStore`]/[`SortedSetStore`] back the container
//! wrappers. Concrete network adapters live outside this crate; the
//! in-memory [`MemoryStore`] is the in-tree reference implementation.
//!
//! Wire values are textual (JSON-compatible); every field value must be
//! representable in that encoding. Handles are shared, create-once-reuse
//! resources, so every operation takes `&self` and implementations use
//! interior mutability. Cancellation and timeouts are the adapter's concern;
//! the model layer imposes none of its own.
//!
//! A key holds exactly one container type at a time. Container operations
//! against a key of another type fail with
//! [`WrongType`](crate::error::HashbaseError::WrongType) rather than
//! silently coercing.

pub mod memory;

pub use memory::MemoryStore;

use std::collections::HashMap;

use crate::error::HashbaseResult;
use crate::model::key::RecordKey;

/// A record's persisted hash: short key → JSON-encoded field text.
pub type StoredHash = HashMap<String, String>;

/// Hash primitives backing the model layer.
///
/// # Overwrite semantics
///
/// [`hash_write`](HashStore::hash_write) replaces the record **wholesale**.
/// Saving a model that declares fewer fields than are stored therefore drops
/// the undeclared fields; last writer wins, with no optimistic concurrency
/// check. Callers needing stronger guarantees must impose
/// single-writer-per-key discipline externally.
pub trait HashStore {
    /// Replace whatever is stored under `key` with this hash, creating the
    /// record if absent. One multi-field operation, never a partial update.
    fn hash_write(&self, key: &RecordKey, fields: &StoredHash) -> HashbaseResult<()>;

    /// All short-key/value pairs for a record, or `None` if the key does not
    /// exist. `Some(empty)` means "created but empty" — distinct from never
    /// created.
    fn hash_read_all(&self, key: &RecordKey) -> HashbaseResult<Option<StoredHash>>;

    /// Remove the entire record under `key`, whatever its container type.
    /// Returns whether anything was removed.
    fn delete(&self, key: &RecordKey) -> HashbaseResult<bool>;
}

/// List primitives: an ordered sequence of text values under one key.
///
/// A missing key behaves as an empty list.
pub trait ListStore {
    /// Append a value to the tail of the list, creating it if absent.
    fn list_push(&self, key: &RecordKey, value: &str) -> HashbaseResult<()>;

    /// The values between `start` and `stop` inclusive. Negative indices
    /// count from the tail, `-1` being the last element.
    fn list_range(&self, key: &RecordKey, start: i64, stop: i64) -> HashbaseResult<Vec<String>>;

    fn list_len(&self, key: &RecordKey) -> HashbaseResult<usize>;
}

/// Set primitives: unordered unique text members under one key.
///
/// A missing key behaves as an empty set.
pub trait SetStore {
    /// Add a member; returns `false` if it was already present.
    fn set_add(&self, key: &RecordKey, member: &str) -> HashbaseResult<bool>;

    /// Remove a member; returns whether it was present.
    fn set_remove(&self, key: &RecordKey, member: &str) -> HashbaseResult<bool>;

    fn set_contains(&self, key: &RecordKey, member: &str) -> HashbaseResult<bool>;

    /// All members, in unspecified order.
    fn set_members(&self, key: &RecordKey) -> HashbaseResult<Vec<String>>;

    fn set_len(&self, key: &RecordKey) -> HashbaseResult<usize>;
}

/// Sorted-set primitives: unique text members ordered by a numeric score.
///
/// A missing key behaves as an empty sorted set.
pub trait SortedSetStore {
    /// Insert a member with `score`, updating the score if the member is
    /// already present.
    fn sorted_set_add(&self, key: &RecordKey, member: &str, score: f64) -> HashbaseResult<()>;

    /// Members between rank `start` and `stop` inclusive, ascending by
    /// score. Negative ranks count from the tail.
    fn sorted_set_range(
        &self,
        key: &RecordKey,
        start: i64,
        stop: i64,
    ) -> HashbaseResult<Vec<(String, f64)>>;

    /// The member's score, if present.
    fn sorted_set_score(&self, key: &RecordKey, member: &str) -> HashbaseResult<Option<f64>>;

    fn sorted_set_len(&self, key: &RecordKey) -> HashbaseResult<usize>;
}

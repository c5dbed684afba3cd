//! Model persistence operations.
//!
//! Free functions tying the codec, the migration engine, and the store
//! contract together. Each is a single blocking round trip to the store
//! (plus one more when a load triggers migration).
//!
//! Remote fields are transparent here: only the reference string is
//! persisted and loaded; resolving the referenced model is an explicit
//! separate [`load`] with that key.

use log::debug;

use crate::codec;
use crate::error::{HashbaseError, HashbaseResult};
use crate::migration;
use crate::model::{Model, RecordKey};
use crate::store::HashStore;

/// Persist `model` under its key, overwriting the stored hash wholesale.
///
/// Serialization happens before the write: an encode failure leaves the
/// store untouched, and the write itself is one multi-field operation, so
/// the stored hash is never half-updated. No optimistic concurrency check —
/// last writer wins.
pub fn save<M, S>(store: &S, model: &M) -> HashbaseResult<()>
where
    M: Model,
    S: HashStore + ?Sized,
{
    let hash = codec::encode_for_store(model)?;
    store.hash_write(model.key(), &hash)?;
    debug!(
        "saved '{}' ({} fields, version {})",
        model.key(),
        hash.len(),
        model.version().value()
    );
    Ok(())
}

/// Populate `model` from the store and reconcile its schema version.
///
/// Reads the full stored hash ([`HashbaseError::NotFound`] if the key is
/// absent), decodes the declared fields — short keys missing from the store
/// keep their defaults — then applies outstanding migration steps in order
/// and re-saves, but only if any step ran. A decode or migration failure
/// aborts before the re-save, leaving the store exactly as it was.
pub fn load<M, S>(store: &S, model: &mut M) -> HashbaseResult<()>
where
    M: Model + 'static,
    S: HashStore + ?Sized,
{
    let stored = store
        .hash_read_all(model.key())?
        .ok_or_else(|| HashbaseError::NotFound(model.key().clone()))?;
    codec::decode_from_store(model, &stored)?;
    if migration::run_pending(model)? {
        save(store, model)?;
        debug!(
            "migrated '{}' to version {}",
            model.key(),
            model.version().value()
        );
    }
    Ok(())
}

/// Render `model` as a JSON document keyed by attribute name.
///
/// Pure: no store access, no mutation.
pub fn dump<M: Model>(model: &M) -> HashbaseResult<String> {
    codec::dump(model)
}

/// Remove the record stored under `key`. Returns whether it existed.
pub fn delete<S>(store: &S, key: &RecordKey) -> HashbaseResult<bool>
where
    S: HashStore + ?Sized,
{
    let removed = store.delete(key)?;
    debug!("deleted '{key}': {removed}");
    Ok(removed)
}

/// Whether a record exists under `key`.
pub fn exists<S>(store: &S, key: &RecordKey) -> HashbaseResult<bool>
where
    S: HashStore + ?Sized,
{
    Ok(store.hash_read_all(key)?.is_some())
}

//! Serialization protocol between models, the store hash, and dump output.
//!
//! Two representations exist side by side:
//!
//! - the **store hash**: short key → JSON-encoded text, one entry per
//!   declared field plus the version slot — what [`HashStore`] reads and
//!   writes;
//! - the **dump document**: attribute name → decoded value, a single JSON
//!   object for external consumption and debugging, never re-loaded.
//!
//! Values round-trip exactly: integers keep full `i64`/`u64` precision and
//! mapping key order is preserved.
//!
//! [`HashStore`]: crate::store::HashStore

use std::collections::HashSet;

use log::trace;
use serde_json::Value;

use crate::error::{HashbaseError, HashbaseResult};
use crate::model::Model;
use crate::model::field::{FieldSlot, VERSION_SHORT_KEY};
use crate::store::StoredHash;

/// Serialize every declared field, plus the version slot, into the store's
/// hash representation keyed by short key.
///
/// Fails with [`HashbaseError::DuplicateShortKey`] if two declarations share
/// a short key (or collide with [`VERSION_SHORT_KEY`]), and with
/// [`HashbaseError::Encode`] if a value cannot be serialized. Either way
/// nothing has been written anywhere yet.
pub fn encode_for_store<M: Model>(model: &M) -> HashbaseResult<StoredHash> {
    let fields = model.fields();
    let mut hash = StoredHash::with_capacity(fields.len() + 1);
    for field in fields {
        if field.short_key() == VERSION_SHORT_KEY {
            return Err(HashbaseError::DuplicateShortKey {
                short_key: field.short_key(),
            });
        }
        let encoded = field.encode()?;
        if hash.insert(field.short_key().to_string(), encoded).is_some() {
            return Err(HashbaseError::DuplicateShortKey {
                short_key: field.short_key(),
            });
        }
    }
    let version = model.version();
    hash.insert(version.short_key().to_string(), version.encode()?);
    trace!("encoded '{}': {} hash entries", model.key(), hash.len());
    Ok(hash)
}

/// Populate a model's declared fields from a stored hash.
///
/// Short keys absent from `stored` leave the field's current (default) value
/// untouched — that is how newly-declared fields surface as defaults until a
/// migration sets them. Stored short keys the model does not declare are
/// ignored. The version slot is decoded the same way, defaulting to 0 when
/// absent.
///
/// Text that fails to parse under the field's type is a hard
/// [`HashbaseError::Decode`], never silently defaulted.
pub fn decode_from_store<M: Model>(model: &mut M, stored: &StoredHash) -> HashbaseResult<()> {
    let mut seen = HashSet::new();
    seen.insert(VERSION_SHORT_KEY);
    for field in model.fields_mut() {
        if !seen.insert(field.short_key()) {
            return Err(HashbaseError::DuplicateShortKey {
                short_key: field.short_key(),
            });
        }
        if let Some(raw) = stored.get(field.short_key()) {
            field.decode(raw)?;
        }
    }
    match stored.get(VERSION_SHORT_KEY) {
        Some(raw) => model.version_mut().decode(raw)?,
        None => model.version_mut().set(0),
    }
    trace!(
        "decoded '{}' at version {}",
        model.key(),
        model.version().value()
    );
    Ok(())
}

/// Render the in-memory model as a JSON document keyed by **attribute name**
/// (not short key), fields in declaration order with `"version"` last.
///
/// Pure: no store access, no mutation. Intended for external consumption and
/// debugging, not for re-loading.
pub fn dump<M: Model>(model: &M) -> HashbaseResult<String> {
    let mut doc = serde_json::Map::new();
    for field in model.fields() {
        doc.insert(field.name().to_string(), field.dump_value()?);
    }
    let version = model.version();
    doc.insert(version.name().to_string(), version.dump_value()?);
    Ok(Value::Object(doc).to_string())
}

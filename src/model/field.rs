//! Typed field slots, the atomic unit of serialization.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{HashbaseError, HashbaseResult};

/// Short key reserved for the implicit version slot.
pub const VERSION_SHORT_KEY: &str = "_v";

/// Attribute name of the implicit version slot in dump output.
pub const VERSION_FIELD_NAME: &str = "version";

/// A named, typed slot holding a value plus its short persisted key.
///
/// The short key (1–4 characters) is the only identifier written to the
/// store, so renaming the in-code attribute never breaks stored data. The
/// attribute name appears only in [`dump`](crate::ops::dump) output.
///
/// `T` is any serde-serializable type whose JSON representation round-trips:
/// scalars, sequences, string-keyed mappings, and options thereof.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    name: &'static str,
    short_key: &'static str,
    value: T,
}

impl<T> Field<T> {
    /// Declare a field with its attribute name, short key, and default
    /// value.
    pub fn new(name: &'static str, short_key: &'static str, value: T) -> Self {
        debug_assert!(
            !short_key.is_empty() && short_key.len() <= 4,
            "short keys are 1-4 characters, got '{short_key}'"
        );
        Self {
            name,
            short_key,
            value,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn short_key(&self) -> &'static str {
        self.short_key
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the current value.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// The version slot every model carries. Starts at 0 and counts applied
/// migration steps; treated as a regular field by the codec, stored under
/// [`VERSION_SHORT_KEY`] and dumped under `"version"`.
pub fn version_field() -> Field<u64> {
    Field::new(VERSION_FIELD_NAME, VERSION_SHORT_KEY, 0)
}

/// Type-erased view of a declared field.
///
/// Lets a model expose its ordered field list without exposing the value
/// types, which is all the codec needs: a name for dump output, a short key
/// for the store hash, and encode/decode over wire text.
pub trait FieldSlot {
    /// In-code attribute name; keys the dump document.
    fn name(&self) -> &'static str;

    /// Stable persisted identifier; keys the store hash.
    fn short_key(&self) -> &'static str;

    /// Serialize the current value to its wire text.
    fn encode(&self) -> HashbaseResult<String>;

    /// Replace the current value by parsing wire text.
    fn decode(&mut self, raw: &str) -> HashbaseResult<()>;

    /// The current value as a JSON tree, for dump output.
    fn dump_value(&self) -> HashbaseResult<serde_json::Value>;
}

impl<T> FieldSlot for Field<T>
where
    T: Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn short_key(&self) -> &'static str {
        self.short_key
    }

    fn encode(&self) -> HashbaseResult<String> {
        serde_json::to_string(&self.value).map_err(|source| HashbaseError::Encode {
            field: self.name,
            source,
        })
    }

    fn decode(&mut self, raw: &str) -> HashbaseResult<()> {
        self.value = serde_json::from_str(raw).map_err(|source| HashbaseError::Decode {
            field: self.name,
            source,
        })?;
        Ok(())
    }

    fn dump_value(&self) -> HashbaseResult<serde_json::Value> {
        serde_json::to_value(&self.value).map_err(|source| HashbaseError::Encode {
            field: self.name,
            source,
        })
    }
}

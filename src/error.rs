use thiserror::Error;

use crate::model::key::RecordKey;

pub type HashbaseResult<T> = Result<T, HashbaseError>;

/// Every failure the mapping layer can surface. Nothing is swallowed or
/// logged-and-ignored inside the core; retries are the caller's
/// responsibility.
#[derive(Error, Debug)]
pub enum HashbaseError {
    /// `load` targeted a key absent from the store. Distinct from "record
    /// exists but has no fields", which loads defaults.
    #[error("Record Not Found: '{0}'")]
    NotFound(RecordKey),

    /// A stored value's text cannot be parsed under the field's expected
    /// type. Surfaced immediately, before any migration runs.
    #[error("Decode Error in field '{field}': {source}")]
    Decode {
        field: &'static str,
        source: serde_json::Error,
    },

    /// A field value cannot be serialized. Aborts `save` before any write.
    #[error("Encode Error in field '{field}': {source}")]
    Encode {
        field: &'static str,
        source: serde_json::Error,
    },

    /// A migration step failed. The load aborts before any re-save, so the
    /// stored version is unchanged and the load is retryable.
    #[error("Migration Error in step '{step}': {message}")]
    Migration { step: &'static str, message: String },

    /// Two declared fields (or a field and the version slot) share a short
    /// key.
    #[error("Duplicate Short Key: '{short_key}'")]
    DuplicateShortKey { short_key: &'static str },

    /// A container operation hit a key holding a different container type.
    #[error("Wrong Container Type at '{key}': expected {expected}")]
    WrongType {
        key: RecordKey,
        expected: &'static str,
    },

    /// Adapter-side failure: connection trouble, a poisoned lock, a full
    /// store.
    #[error("Store Error: {0}")]
    Store(String),
}

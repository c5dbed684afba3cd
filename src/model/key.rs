use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// The globally unique string identifying one model's persisted state in the
/// store.
///
/// Keys are caller-supplied and never auto-generated. Serializes as a bare
/// string, so a [`RemoteField`](crate::relational::RemoteField) persists as
/// the referenced key and nothing else.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
#[display("{_0}")]
pub struct RecordKey(String);

impl RecordKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl AsRef<str> for RecordKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

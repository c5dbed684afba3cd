//! One-way references between models.

use crate::error::HashbaseResult;
use crate::model::field::{Field, FieldSlot};
use crate::model::key::RecordKey;

/// A field whose persisted value is another record's key rather than inline
/// data.
///
/// Only the reference string is saved and loaded; the referenced record must
/// itself be loadable as a model of some type, and dereferencing it is the
/// caller's responsibility — there is no automatic join:
///
/// ```rust,ignore
/// let mut author = Author::new(article.author.target().clone());
/// load(&store, &mut author)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteField {
    inner: Field<RecordKey>,
}

impl RemoteField {
    pub fn new(name: &'static str, short_key: &'static str, target: RecordKey) -> Self {
        Self {
            inner: Field::new(name, short_key, target),
        }
    }

    /// The referenced record's key.
    pub fn target(&self) -> &RecordKey {
        self.inner.value()
    }

    /// Point the reference at a different record.
    pub fn set_target(&mut self, target: RecordKey) {
        self.inner.set(target);
    }
}

impl FieldSlot for RemoteField {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn short_key(&self) -> &'static str {
        self.inner.short_key()
    }

    fn encode(&self) -> HashbaseResult<String> {
        self.inner.encode()
    }

    fn decode(&mut self, raw: &str) -> HashbaseResult<()> {
        self.inner.decode(raw)
    }

    fn dump_value(&self) -> HashbaseResult<serde_json::Value> {
        self.inner.dump_value()
    }
}

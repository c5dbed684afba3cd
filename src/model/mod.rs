//! The model abstraction: records as ordered collections of declared fields.
//!
//! A model is one logical record — a unique [`RecordKey`], an ordered set of
//! typed [`Field`]s, and an implicit version field counting how many
//! migration steps have been applied to the persisted record. Fields are
//! declared explicitly as struct members and exposed through
//! [`Model::fields`]; there is no runtime reflection.

pub mod field;
pub mod key;

pub use field::{Field, FieldSlot, VERSION_SHORT_KEY, version_field};
pub use key::RecordKey;

use crate::migration::Migration;

/// A persistent record.
///
/// Implementors declare their fields as plain struct members and return them
/// from [`fields`](Model::fields)/[`fields_mut`](Model::fields_mut) in
/// declaration order, excluding the version slot (the codec and the
/// migration engine handle that one through
/// [`version`](Model::version)/[`version_mut`](Model::version_mut)).
///
/// The key is stable for the lifetime of the record. Two models sharing a
/// key in the store represent the same logical record, regardless of which
/// model type is used to load it.
///
/// # Example
///
/// ```rust
/// use hashbase_store::prelude::*;
///
/// struct Article {
///     key: RecordKey,
///     title: Field<Option<String>>,
///     tags: Field<Vec<String>>,
///     version: Field<u64>,
/// }
///
/// impl Model for Article {
///     fn key(&self) -> &RecordKey {
///         &self.key
///     }
///     fn version(&self) -> &Field<u64> {
///         &self.version
///     }
///     fn version_mut(&mut self) -> &mut Field<u64> {
///         &mut self.version
///     }
///     fn fields(&self) -> Vec<&dyn FieldSlot> {
///         vec![&self.title, &self.tags]
///     }
///     fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot> {
///         vec![&mut self.title, &mut self.tags]
///     }
/// }
/// ```
pub trait Model {
    /// The record's unique identity in the store. Caller-supplied, never
    /// auto-generated.
    fn key(&self) -> &RecordKey;

    /// The implicit version field: the number of migration steps applied to
    /// the persisted record. Starts at 0.
    fn version(&self) -> &Field<u64>;

    fn version_mut(&mut self) -> &mut Field<u64>;

    /// The declared fields in declaration order, excluding the version slot.
    fn fields(&self) -> Vec<&dyn FieldSlot>;

    fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot>;

    /// The ordered migration steps this model type declares.
    ///
    /// Resolved at definition time as a `'static` slice — never
    /// reconstructed per call. The step at index `i` advances a record from
    /// version `i` to version `i + 1`. Steps are immutable once shipped:
    /// reordering or removing a previously-shipped step corrupts the meaning
    /// of version numbers already stored for existing records, and the
    /// engine does not detect that.
    fn migrations() -> &'static [Migration<Self>]
    where
        Self: Sized,
    {
        &[]
    }
}

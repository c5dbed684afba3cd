//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and functions, allowing users to
//! get started with a single import:
//!
//! ```rust
//! use hashbase_store::prelude::*;
//! ```
//!
//! # What's Included
//!
//! ## Model Layer
//!
//! - [`Model`]: trait implemented by persistent record types
//! - [`Field`] / [`FieldSlot`]: typed field slots and their erased view
//! - [`RemoteField`]: a field referencing another record by key
//! - [`RecordKey`]: record identity
//! - [`version_field`]: constructor for the implicit version slot
//! - [`Migration`]: one declared schema-upgrade step
//!
//! ## Operations
//!
//! - [`save`] / [`load`] / [`dump`] / [`delete`] / [`exists`]
//!
//! ## Store Contract
//!
//! - [`HashStore`], [`ListStore`], [`SetStore`], [`SortedSetStore`]
//! - [`StoredHash`]: the wire hash representation
//! - [`MemoryStore`] / [`MemoryConfig`]: the in-tree adapter
//!
//! ## Containers
//!
//! - [`List`], [`Set`], [`SortedSet`]: pass-through handles over the store's
//!   container primitives
//!
//! ## Error Handling
//!
//! - [`HashbaseError`]: the crate-wide error type
//! - [`HashbaseResult`]: result alias (`Result<T, HashbaseError>`)

pub use crate::config::MemoryConfig;
pub use crate::containers::{List, Set, SortedSet};
pub use crate::error::{HashbaseError, HashbaseResult};
pub use crate::migration::Migration;
pub use crate::model::{Field, FieldSlot, Model, RecordKey, version_field};
pub use crate::ops::{delete, dump, exists, load, save};
pub use crate::relational::RemoteField;
pub use crate::store::{
    HashStore, ListStore, MemoryStore, SetStore, SortedSetStore, StoredHash,
};

//! # Hashbase Store
//!
//! A lightweight object-mapping layer that persists structured models into a
//! remote key-value hash store, with built-in schema migration.
//!
//! ## Features
//!
//! - **Explicit schemas**: models declare named, typed fields with stable
//!   short keys, decoupling persisted data from in-code attribute names
//! - **Versioned migration**: each model type carries a fixed, ordered list
//!   of migration steps; outstanding steps are applied exactly once per
//!   record on load and persisted back so they never re-run
//! - **Lossless text encoding**: field values round-trip exactly through
//!   JSON, integers included
//! - **Remote references**: fields that hold another record's key instead of
//!   embedded data
//! - **Pluggable stores**: the wire contract is a small trait set; a shared
//!   in-memory adapter ships in-tree for tests and demos
//!
//! ## Quick Start
//!
//! ```rust
//! use hashbase_store::prelude::*;
//!
//! struct User {
//!     key: RecordKey,
//!     name: Field<Option<String>>,
//!     version: Field<u64>,
//! }
//!
//! impl User {
//!     fn new(key: impl Into<RecordKey>, name: Option<String>) -> Self {
//!         Self {
//!             key: key.into(),
//!             name: Field::new("name", "n", name),
//!             version: version_field(),
//!         }
//!     }
//! }
//!
//! impl Model for User {
//!     fn key(&self) -> &RecordKey {
//!         &self.key
//!     }
//!     fn version(&self) -> &Field<u64> {
//!         &self.version
//!     }
//!     fn version_mut(&mut self) -> &mut Field<u64> {
//!         &mut self.version
//!     }
//!     fn fields(&self) -> Vec<&dyn FieldSlot> {
//!         vec![&self.name]
//!     }
//!     fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot> {
//!         vec![&mut self.name]
//!     }
//! }
//!
//! # fn main() -> HashbaseResult<()> {
//! let store = MemoryStore::new();
//! save(&store, &User::new("user:1", Some("Alice".to_string())))?;
//!
//! let mut user = User::new("user:1", None);
//! load(&store, &mut user)?;
//! assert_eq!(user.name.value().as_deref(), Some("Alice"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! All calls are synchronous, blocking, single request-response round trips
//! to the store. [`save`](ops::save) is last-writer-wins with no optimistic
//! concurrency check: two concurrent load-migrate-save sequences on the same
//! record can race, the later save silently overwriting the earlier
//! migration's effects. Callers needing stronger guarantees must impose
//! single-writer-per-key discipline externally. Store handles are
//! process-wide, create-once-reuse resources; the model layer never assumes
//! per-call reconnection.

pub mod codec;
pub mod config;
pub mod containers;
pub mod error;
pub mod migration;
pub mod model;
pub mod ops;
pub mod prelude;
pub mod relational;
pub mod store;

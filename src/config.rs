//! Adapter configuration.
//!
//! Builder-style configuration via `typed-builder`. Connection-level
//! settings (endpoints, timeouts, pooling) belong to the concrete network
//! adapters outside this crate; only the in-tree adapter's knobs live here.

use typed_builder::TypedBuilder;

/// Configuration for the in-memory store adapter.
///
/// # Examples
///
/// ```
/// use hashbase_store::config::MemoryConfig;
///
/// let config = MemoryConfig::builder()
///     .initial_capacity(10_000)
///     .build();
/// assert_eq!(config.initial_capacity, 10_000);
/// assert_eq!(config.max_entries, None);
/// ```
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct MemoryConfig {
    /// Initial capacity hint for the underlying storage
    #[builder(default = 1024)]
    pub initial_capacity: usize,

    /// Maximum number of keys before writes are refused
    #[builder(default = None)]
    pub max_entries: Option<usize>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            max_entries: None,
        }
    }
}

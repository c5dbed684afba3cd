//! The versioned migration engine.
//!
//! A model type declares a fixed, ordered list of migration steps. On every
//! load the engine reconciles the record's stored version against the
//! declared step count:
//!
//! - stored version ≥ declared count: nothing to do. This also covers
//!   loading with an older model type than the one that last touched the
//!   record — allowed, and the record is left exactly as stored.
//! - stored version < declared count: the outstanding steps are applied in
//!   order, each seeing the effects of all prior steps, then the version is
//!   set to the declared count and the caller persists the model. The next
//!   load sees an up-to-date version and applies nothing, which is what
//!   makes migration observably idempotent.
//!
//! A step that fails aborts the whole load before any re-save, leaving the
//! stored version unchanged, so the load is safely retryable — provided
//! steps are side-effect-free on failure, which is the step author's
//! responsibility, not the engine's.

use std::fmt;

use log::debug;

use crate::error::{HashbaseError, HashbaseResult};
use crate::model::Model;

/// A single schema upgrade: one ordered, in-place transformation advancing a
/// record from one version to the next.
///
/// Declared as `'static` slices, typically one per model type:
///
/// ```rust,ignore
/// fn migrations() -> &'static [Migration<Self>] {
///     const STEPS: &[Migration<Article>] = &[
///         Migration { name: "add_summary", apply: backfill_summary },
///         Migration { name: "tag_cleanup", apply: drop_empty_tags },
///     ];
///     STEPS
/// }
/// ```
pub struct Migration<M> {
    /// Step name, for logs and error reports.
    pub name: &'static str,
    /// In-place transformation of the model's field values.
    pub apply: fn(&mut M) -> HashbaseResult<()>,
}

impl<M> fmt::Debug for Migration<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Migration").field("name", &self.name).finish()
    }
}

impl<M> Clone for Migration<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Migration<M> {}

/// Apply every outstanding migration step to `model`, in declaration order.
///
/// Returns `true` if any step ran — the caller must then persist the model
/// so the steps never re-run. Steps whose index is below the stored version
/// are never re-applied.
pub(crate) fn run_pending<M: Model + 'static>(model: &mut M) -> HashbaseResult<bool> {
    let steps = M::migrations();
    let stored = *model.version().value();
    let declared = steps.len() as u64;
    if stored >= declared {
        return Ok(false);
    }

    for (index, step) in steps.iter().enumerate().skip(stored as usize) {
        (step.apply)(model).map_err(|err| HashbaseError::Migration {
            step: step.name,
            message: err.to_string(),
        })?;
        debug!(
            "applied migration '{}' ({} -> {}) to '{}'",
            step.name,
            index,
            index + 1,
            model.key()
        );
    }
    model.version_mut().set(declared);
    Ok(true)
}

//! Reconciliation passes for the javadecl declaration generator.
//!
//! The passes rewrite member lists so that the source language's
//! inheritance and naming rules survive translation into the target:
//! - `restore_overloads`: re-declare inherited overloads hidden by a subtype
//! - `backfill_docs`: copy documentation from overridden interface methods
//! - `remove_duplicates`: drop signatures made identical by primitive mapping
//! - `resolve_conflicts`: demote accessors whose property name is contested
//!
//! `reconcile` runs all four in that order.

use rayon::prelude::*;
use tracing::debug;

use javadecl_model::{TypeDefinition, TypeTable};

pub mod ancestors;
pub use ancestors::{effective_method_ids, visit_ancestors};

pub mod method_id;
pub use method_id::{MethodId, param_display_name};

mod plan;

pub mod overloads;
pub use overloads::{missing_overloads, restore_overloads};

pub mod docs;
pub use docs::{backfill_docs, inherited_docs};

pub mod duplicates;
pub use duplicates::remove_duplicates;

pub mod conflicts;
pub use conflicts::resolve_conflicts;

/// What a [`reconcile`] run changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub overloads_restored: usize,
    pub docs_backfilled: usize,
    pub duplicates_removed: usize,
    pub accessors_demoted: usize,
}

/// Runs every reconciliation pass over the table.
///
/// The table must be fully populated. Overload restoration and doc backfill
/// read ancestors through it; duplicate removal and conflict resolution
/// then run per definition in parallel.
pub fn reconcile(table: &mut TypeTable) -> ReconcileStats {
    let _span = tracing::debug_span!("reconcile", types = table.len()).entered();

    let overloads_restored = restore_overloads(table);
    let docs_backfilled = backfill_docs(table);
    let (duplicates_removed, accessors_demoted) = table
        .definitions_mut()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(tidy_members)
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    let stats = ReconcileStats {
        overloads_restored,
        docs_backfilled,
        duplicates_removed,
        accessors_demoted,
    };
    debug!(?stats, "reconciliation finished");
    stats
}

/// Duplicate removal followed by conflict resolution, recursively.
fn tidy_members(def: &mut TypeDefinition) -> (usize, usize) {
    let mut removed = remove_duplicates(def);
    let mut demoted = resolve_conflicts(def);
    for nested in def.nested_types_mut() {
        let (r, d) = tidy_members(nested);
        removed += r;
        demoted += d;
    }
    (removed, demoted)
}

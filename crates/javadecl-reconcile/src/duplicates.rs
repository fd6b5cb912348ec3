//! Duplicate-signature removal.
//!
//! Several numeric source types collapse onto one target primitive, which
//! can turn distinct overloads into identical declarations.

use rustc_hash::FxHashSet;
use tracing::trace;

use javadecl_model::{Member, TypeDefinition};

use crate::method_id::MethodId;

/// Drops every method whose [`MethodId`] was already seen earlier in the
/// member list. Returns the number of dropped members.
pub fn remove_duplicates(def: &mut TypeDefinition) -> usize {
    let mut seen = FxHashSet::default();
    let mut removed = 0;
    let owner = def.qualified_name().to_string();
    def.retain_members(|_, member| {
        let Member::Method(method) = member else {
            return true;
        };
        let id = MethodId::of(method);
        if seen.contains(&id) {
            trace!(owner = %owner, method = %id, "dropping duplicate signature");
            removed += 1;
            false
        } else {
            seen.insert(id);
            true
        }
    });
    removed
}

#[cfg(test)]
#[path = "tests/duplicates_tests.rs"]
mod tests;

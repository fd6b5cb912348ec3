//! Accessor name-conflict resolution.
//!
//! A getter and a setter sharing one property name form a valid accessor
//! pair. Any other group of members that shares an exposed name and
//! contains an accessor is invalid in the target, so the accessors in it
//! are turned back into plain methods under their original names.

use indexmap::IndexMap;
use tracing::trace;

use javadecl_model::{Member, MethodKind, TypeDefinition};

/// Demotes conflicting accessors. Returns the number of demoted members.
pub fn resolve_conflicts(def: &mut TypeDefinition) -> usize {
    let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (index, member) in def.members().iter().enumerate() {
        groups.entry(member.name().to_string()).or_default().push(index);
    }

    let mut demoted = 0;
    for (name, indices) in groups {
        if !is_conflict(def, &indices) {
            continue;
        }
        for index in indices {
            let Some(accessor) = def
                .member(index)
                .and_then(Member::as_method)
                .filter(|m| m.kind.is_accessor())
                .cloned()
            else {
                continue;
            };
            let method = accessor.demote_accessor();
            trace!(
                owner = def.qualified_name(),
                property = %name,
                method = %method.name,
                "demoting conflicting accessor"
            );
            def.replace_member(index, method.into());
            demoted += 1;
        }
    }
    demoted
}

fn is_conflict(def: &TypeDefinition, indices: &[usize]) -> bool {
    if indices.len() < 2 {
        return false;
    }
    let kinds: Vec<Option<&MethodKind>> = indices
        .iter()
        .map(|&i| def.member(i).and_then(Member::as_method).map(|m| &m.kind))
        .collect();
    if !kinds.iter().flatten().any(|kind| kind.is_accessor()) {
        return false;
    }
    let accessor_pair = matches!(
        kinds.as_slice(),
        [Some(MethodKind::Getter { .. }), Some(MethodKind::Setter { .. })]
            | [Some(MethodKind::Setter { .. }), Some(MethodKind::Getter { .. })]
    );
    !accessor_pair
}

#[cfg(test)]
#[path = "tests/conflicts_tests.rs"]
mod tests;

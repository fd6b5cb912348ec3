//! Supertype and interface traversal through the type table.

use rustc_hash::FxHashSet;

use javadecl_model::{Member, MethodKind, TypeDefinition, TypeTable};

use crate::method_id::MethodId;

/// Visits every ancestor of `def` that resolves in `table`.
///
/// Depth-first, supertypes before interfaces at each level. References that
/// do not resolve are skipped together with everything above them. Each
/// ancestor is visited at most once per walk, which also stops cycles in
/// malformed input.
pub fn visit_ancestors<'a>(
    table: &'a TypeTable,
    def: &TypeDefinition,
    visitor: &mut impl FnMut(&'a TypeDefinition),
) {
    let mut visited = FxHashSet::default();
    visited.insert(def.qualified_name().to_string());
    walk(table, def, &mut visited, visitor);
}

fn walk<'a>(
    table: &'a TypeTable,
    def: &TypeDefinition,
    visited: &mut FxHashSet<String>,
    visitor: &mut impl FnMut(&'a TypeDefinition),
) {
    for parent_ref in def.ancestors() {
        let Some(parent) = table.resolve(parent_ref) else {
            continue;
        };
        if !visited.insert(parent.qualified_name().to_string()) {
            continue;
        }
        visitor(parent);
        walk(table, parent, visited, visitor);
    }
}

/// Ids of every method `def` exposes once emitted: its own methods followed
/// by those inherited from resolvable ancestors.
///
/// Constructors are not inherited.
pub fn effective_method_ids(table: &TypeTable, def: &TypeDefinition) -> FxHashSet<MethodId> {
    let mut ids: FxHashSet<MethodId> = def
        .members()
        .iter()
        .filter_map(Member::as_method)
        .map(MethodId::of)
        .collect();
    visit_ancestors(table, def, &mut |parent| {
        ids.extend(
            parent
                .members()
                .iter()
                .filter_map(Member::as_method)
                .filter(|m| m.kind != MethodKind::Constructor)
                .map(MethodId::of),
        );
    });
    ids
}

#[cfg(test)]
#[path = "tests/ancestors_tests.rs"]
mod tests;

//! Documentation backfill from overridden interface methods.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use javadecl_model::{Member, Method, TypeDefinition, TypeRef, TypeTable};

use crate::plan::plan_and_apply;

/// Copies documentation onto undocumented overriding methods. Returns the
/// number of members that received documentation.
pub fn backfill_docs(table: &mut TypeTable) -> usize {
    let mut filled = 0;
    plan_and_apply(table, inherited_docs, |def, docs| {
        filled += docs.len();
        for (index, doc) in docs {
            def.set_member_doc(index, doc);
        }
    });
    debug!(filled, "backfilled inherited documentation");
    filled
}

/// `(member index, documentation)` pairs for the members of `def` that lack
/// their own documentation but override a documented interface method.
pub fn inherited_docs(table: &TypeTable, def: &TypeDefinition) -> Vec<(usize, String)> {
    let mut docs = Vec::new();
    for (index, member) in def.members().iter().enumerate() {
        let Member::Method(method) = member else {
            continue;
        };
        if method.attrs.is_static || method.attrs.doc.is_some() || !method.is_override {
            continue;
        }
        if let Some(doc) = overridden_interface_doc(table, def, method) {
            trace!(
                owner = def.qualified_name(),
                member = %method.name,
                "inheriting documentation"
            );
            docs.push((index, doc.to_string()));
        }
    }
    docs
}

/// Searches the direct interfaces of `def` (not its supertypes) for a
/// documented method of the same kind and name as `method`.
fn overridden_interface_doc<'a>(
    table: &'a TypeTable,
    def: &TypeDefinition,
    method: &Method,
) -> Option<&'a str> {
    for interface in &def.interfaces {
        let mut visited = FxHashSet::default();
        let Some(source) = override_source(table, interface, &method.name, &mut visited) else {
            continue;
        };
        let overridden = source
            .members()
            .iter()
            .filter_map(Member::as_method)
            .find(|m| m.kind.same_kind(&method.kind) && m.name == method.name);
        if let Some(doc) = overridden.and_then(|m| m.attrs.doc.as_deref()) {
            return Some(doc);
        }
    }
    None
}

/// Nearest definition reachable from `type_ref` that declares a member
/// named `name`: the type itself, then its supertypes, then its interfaces,
/// depth-first.
fn override_source<'a>(
    table: &'a TypeTable,
    type_ref: &TypeRef,
    name: &str,
    visited: &mut FxHashSet<&'a str>,
) -> Option<&'a TypeDefinition> {
    let def = table.resolve(type_ref)?;
    if !visited.insert(def.qualified_name()) {
        return None;
    }
    if def.has_member(name) {
        return Some(def);
    }
    def.ancestors()
        .find_map(|parent| override_source(table, parent, name, visited))
}

#[cfg(test)]
#[path = "tests/docs_tests.rs"]
mod tests;

//! Inherited-overload restoration.
//!
//! Declaring any member named `foo` in a subtype hides every inherited
//! overload of `foo` in the generated declarations. For each name a type
//! already declares, the overloads it inherits under that name are copied
//! in unless an identical signature is already present.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use javadecl_model::{Member, Method, MethodKind, TypeDefinition, TypeTable};

use crate::ancestors::visit_ancestors;
use crate::method_id::MethodId;
use crate::plan::plan_and_apply;

/// Restores inherited overloads on every definition in the table, nested
/// ones included. Returns the number of copied methods.
pub fn restore_overloads(table: &mut TypeTable) -> usize {
    let mut copied = 0;
    plan_and_apply(table, missing_overloads, |def, methods| {
        copied += methods.len();
        for method in methods {
            def.push_member(method.into());
        }
    });
    debug!(copied, "restored inherited overloads");
    copied
}

/// Inherited methods `def` needs to re-declare, in ancestor visiting order.
/// The first ancestor method with a given id wins.
pub fn missing_overloads(table: &TypeTable, def: &TypeDefinition) -> Vec<Method> {
    let mut ids: FxHashSet<MethodId> = def
        .members()
        .iter()
        .filter_map(Member::as_method)
        .map(MethodId::of)
        .collect();
    let mut missing = Vec::new();
    visit_ancestors(table, def, &mut |parent| {
        for method in parent.members().iter().filter_map(Member::as_method) {
            if method.kind == MethodKind::Constructor || !def.has_member(&method.name) {
                continue;
            }
            let id = MethodId::of(method);
            if ids.contains(&id) {
                continue;
            }
            trace!(
                owner = def.qualified_name(),
                from = parent.qualified_name(),
                method = %id,
                "copying inherited overload"
            );
            ids.insert(id);
            missing.push(method.clone());
        }
    });
    missing
}

#[cfg(test)]
#[path = "tests/overloads_tests.rs"]
mod tests;

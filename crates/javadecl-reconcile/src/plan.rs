//! Plan-then-apply scaffolding for table-wide passes.
//!
//! Passes that read ancestors cannot mutate the table while walking it.
//! They compute a [`Planned`] value per definition against the frozen
//! table, in parallel, and then apply the plans one definition at a time.

use rayon::prelude::*;

use javadecl_model::{TypeDefinition, TypeTable};

/// A per-definition plan together with the plans for its nested types, in
/// [`TypeDefinition::nested_types`] order.
pub(crate) struct Planned<T> {
    own: T,
    nested: Vec<Planned<T>>,
}

impl<T> Planned<T> {
    fn build(def: &TypeDefinition, plan: &impl Fn(&TypeDefinition) -> T) -> Self {
        Planned {
            own: plan(def),
            nested: def.nested_types().map(|nested| Planned::build(nested, plan)).collect(),
        }
    }

    /// Applying must not add or remove nested types before the nested plans
    /// are matched up.
    fn apply(self, def: &mut TypeDefinition, apply: &mut impl FnMut(&mut TypeDefinition, T)) {
        apply(def, self.own);
        for (nested, plan) in def.nested_types_mut().zip(self.nested) {
            plan.apply(nested, &mut *apply);
        }
    }
}

/// Plans every definition (nested ones included) in parallel, then applies
/// the plans in table order.
pub(crate) fn plan_and_apply<T: Send>(
    table: &mut TypeTable,
    plan: impl Fn(&TypeTable, &TypeDefinition) -> T + Sync,
    mut apply: impl FnMut(&mut TypeDefinition, T),
) {
    let plans: Vec<Planned<T>> = {
        let frozen: &TypeTable = table;
        let defs: Vec<&TypeDefinition> = frozen.definitions().collect();
        defs.par_iter()
            .map(|def| Planned::build(def, &|d| plan(frozen, d)))
            .collect()
    };
    for (def, planned) in table.definitions_mut().zip(plans) {
        planned.apply(def, &mut apply);
    }
}

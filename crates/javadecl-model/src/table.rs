//! The type table: every extracted definition, keyed by qualified name.
//!
//! Definitions never reference each other directly. Supertype and interface
//! links are [`TypeRef`]s resolved through this table, which owns every
//! top-level definition. Nested definitions stay inside their enclosing
//! type's member list and are not indexed here.

use indexmap::IndexMap;
use indexmap::map::{Iter, IterMut, Values, ValuesMut};
use tracing::warn;

use crate::definition::TypeDefinition;
use crate::type_ref::TypeRef;

#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    types: IndexMap<String, TypeDefinition>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from the full extracted set, in input order.
    ///
    /// A later definition with an already-present name replaces the earlier
    /// one in place.
    pub fn from_definitions(defs: impl IntoIterator<Item = TypeDefinition>) -> Self {
        let mut table = Self::new();
        for def in defs {
            table.insert(def);
        }
        table
    }

    pub fn insert(&mut self, def: TypeDefinition) {
        let name = def.qualified_name().to_string();
        if let Some(previous) = self.types.insert(name, def) {
            warn!(
                name = previous.qualified_name(),
                "duplicate type definition, keeping the later one"
            );
        }
    }

    pub fn get(&self, qualified_name: &str) -> Option<&TypeDefinition> {
        self.types.get(qualified_name)
    }

    pub fn get_mut(&mut self, qualified_name: &str) -> Option<&mut TypeDefinition> {
        self.types.get_mut(qualified_name)
    }

    /// Resolves a supertype or interface reference.
    ///
    /// Generic arguments and nullability are ignored. `None` means the type
    /// lies outside the translated set.
    pub fn resolve(&self, type_ref: &TypeRef) -> Option<&TypeDefinition> {
        self.types.get(type_ref.base_type().qualified_name()?)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, TypeDefinition> {
        self.types.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, String, TypeDefinition> {
        self.types.iter_mut()
    }

    pub fn definitions(&self) -> Values<'_, String, TypeDefinition> {
        self.types.values()
    }

    pub fn definitions_mut(&mut self) -> ValuesMut<'_, String, TypeDefinition> {
        self.types.values_mut()
    }
}

impl FromIterator<TypeDefinition> for TypeTable {
    fn from_iter<I: IntoIterator<Item = TypeDefinition>>(iter: I) -> Self {
        Self::from_definitions(iter)
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;

//! Name blacklist.
//!
//! Fragments are matched as substrings of qualified names. Anything that
//! mentions a blacklisted type is dropped: a definition whose own reference
//! or any supertype or interface matches, and any member whose field,
//! return, parameter or bound types match. Nested definitions are filtered
//! by the same rule.

use tracing::trace;

use crate::definition::TypeDefinition;
use crate::member::Member;
use crate::type_ref::TypeRef;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blacklist {
    fragments: Vec<String>,
}

impl Blacklist {
    pub fn new(fragments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fragments: fragments
                .into_iter()
                .map(Into::into)
                .filter(|f: &String| !f.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn matches_name(&self, qualified_name: &str) -> bool {
        self.fragments
            .iter()
            .any(|fragment| qualified_name.contains(fragment.as_str()))
    }

    /// Whether `type_ref` or any reference nested in it is blacklisted.
    pub fn matches_ref(&self, type_ref: &TypeRef) -> bool {
        !self.is_empty()
            && type_ref
                .any(&mut |ty| matches!(ty, TypeRef::Simple(s) if self.matches_name(s.name())))
    }

    pub fn matches_member(&self, member: &Member) -> bool {
        if self.is_empty() {
            return false;
        }
        match member {
            Member::Type(def) => self.matches_definition_header(def),
            _ => {
                let mut hit = false;
                member.walk_type_refs(&mut |ty| {
                    if !hit && self.matches_ref(ty) {
                        hit = true;
                    }
                });
                hit
            }
        }
    }

    fn matches_definition_header(&self, def: &TypeDefinition) -> bool {
        self.matches_ref(&def.type_ref) || def.ancestors().any(|ty| self.matches_ref(ty))
    }

    /// Applies the blacklist to a definition.
    ///
    /// Returns `None` when the definition itself is dropped; otherwise the
    /// definition with offending members removed, recursively.
    pub fn filter(&self, mut def: TypeDefinition) -> Option<TypeDefinition> {
        if self.is_empty() {
            return Some(def);
        }
        if self.matches_definition_header(&def) {
            trace!(name = def.qualified_name(), "dropping blacklisted type");
            return None;
        }
        let owner = def.qualified_name().to_string();
        def.retain_members(|_, member| {
            let drop = self.matches_member(member);
            if drop {
                trace!(owner = %owner, member = member.name(), "dropping blacklisted member");
            }
            !drop
        });
        for nested in def.nested_types_mut() {
            filter_members_in_place(self, nested);
        }
        Some(def)
    }
}

/// Member filtering for nested types, whose headers were already checked by
/// the enclosing definition.
fn filter_members_in_place(blacklist: &Blacklist, def: &mut TypeDefinition) {
    def.retain_members(|_, member| !blacklist.matches_member(member));
    for nested in def.nested_types_mut() {
        filter_members_in_place(blacklist, nested);
    }
}

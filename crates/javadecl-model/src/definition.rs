//! Type definitions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::member::{Member, MemberAttrs};
use crate::type_ref::{TypeParam, TypeRef, split_qualified};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Class,
    Interface,
    FunctionalInterface,
    Enum,
    Annotation,
}

/// A declared type and its members.
///
/// The member list is private: passes mutate it through the methods below,
/// which keep the member-name multiset in step with every change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDefinition {
    pub attrs: MemberAttrs,
    /// Reference to the type itself, parametrized by its own type variables
    /// when generic.
    pub type_ref: TypeRef,
    pub kind: TypeKind,
    pub is_abstract: bool,
    pub type_params: Vec<TypeParam>,
    pub super_types: Vec<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    members: Vec<Member>,
    member_names: FxHashMap<String, u32>,
}

impl TypeDefinition {
    pub fn new(type_ref: TypeRef, kind: TypeKind) -> Self {
        Self {
            attrs: MemberAttrs::public(),
            type_ref,
            kind,
            is_abstract: false,
            type_params: Vec::new(),
            super_types: Vec::new(),
            interfaces: Vec::new(),
            members: Vec::new(),
            member_names: FxHashMap::default(),
        }
    }

    pub fn with_attrs(mut self, attrs: MemberAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeParam>) -> Self {
        self.type_params = type_params;
        self
    }

    pub fn with_super_types(mut self, super_types: Vec<TypeRef>) -> Self {
        self.super_types = super_types;
        self
    }

    pub fn with_interfaces(mut self, interfaces: Vec<TypeRef>) -> Self {
        self.interfaces = interfaces;
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        for member in members {
            self.push_member(member);
        }
        self
    }

    /// Fully qualified name, without generic arguments.
    pub fn qualified_name(&self) -> &str {
        match self.type_ref.base_type() {
            TypeRef::Simple(simple) => simple.name(),
            // Definitions are always named; anything else is an extractor bug
            // and is reported under an empty name rather than panicking.
            _ => "",
        }
    }

    pub fn simple_name(&self) -> &str {
        split_qualified(self.qualified_name()).1
    }

    /// Namespace prefix of the qualified name, empty for the default package.
    pub fn namespace(&self) -> &str {
        split_qualified(self.qualified_name()).0.unwrap_or("")
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.member_names.contains_key(name)
    }

    pub fn push_member(&mut self, member: Member) {
        self.claim_name(member.name());
        self.members.push(member);
    }

    /// Replaces the member at `index`, returning the previous one.
    ///
    /// Returns `None` and leaves the list untouched when `index` is out of
    /// bounds.
    pub fn replace_member(&mut self, index: usize, member: Member) -> Option<Member> {
        if index >= self.members.len() {
            return None;
        }
        self.claim_name(member.name());
        let old = std::mem::replace(&mut self.members[index], member);
        self.release_name(old.name());
        Some(old)
    }

    /// Keeps only members for which `keep` returns true, in order.
    pub fn retain_members(&mut self, mut keep: impl FnMut(usize, &Member) -> bool) {
        let members = std::mem::take(&mut self.members);
        for (index, member) in members.into_iter().enumerate() {
            if keep(index, &member) {
                self.members.push(member);
            } else {
                self.release_name(member.name());
            }
        }
    }

    /// Sets documentation on the member at `index`; names are unaffected.
    pub fn set_member_doc(&mut self, index: usize, doc: String) {
        if let Some(member) = self.members.get_mut(index) {
            member.attrs_mut().doc = Some(doc);
        }
    }

    /// Nested type definitions, in member order.
    pub fn nested_types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.members.iter().filter_map(Member::as_type)
    }

    /// Mutable access to nested types. Callers must not change a nested
    /// type's `type_ref`, which is the name it is indexed under.
    pub fn nested_types_mut(&mut self) -> impl Iterator<Item = &mut TypeDefinition> {
        self.members.iter_mut().filter_map(|member| match member {
            Member::Type(def) => Some(def.as_mut()),
            _ => None,
        })
    }

    /// Supertypes followed by interfaces.
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeRef> {
        self.super_types.iter().chain(self.interfaces.iter())
    }

    /// Every type reference in the definition's own structure: its self
    /// reference, type-parameter bounds, supertypes, interfaces and the
    /// references of non-type members. Nested types are not entered.
    pub fn walk_type_refs<'a>(&'a self, visitor: &mut impl FnMut(&'a TypeRef)) {
        self.type_ref.walk(visitor);
        for tp in &self.type_params {
            if let Some(bound) = &tp.bound {
                bound.walk(visitor);
            }
        }
        for ancestor in self.ancestors() {
            ancestor.walk(visitor);
        }
        for member in &self.members {
            member.walk_type_refs(visitor);
        }
    }

    fn claim_name(&mut self, name: &str) {
        *self.member_names.entry(name.to_string()).or_insert(0) += 1;
    }

    fn release_name(&mut self, name: &str) {
        if let Some(count) = self.member_names.get_mut(name) {
            *count -= 1;
            if *count == 0 {
                self.member_names.remove(name);
            }
        }
    }
}

/// Wire form of [`TypeDefinition`]; the name multiset is rebuilt on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeDefinition {
    #[serde(flatten)]
    attrs: MemberAttrs,
    #[serde(rename = "ref")]
    type_ref: TypeRef,
    kind: TypeKind,
    #[serde(default)]
    is_abstract: bool,
    #[serde(default)]
    type_params: Vec<TypeParam>,
    #[serde(default)]
    super_types: Vec<TypeRef>,
    #[serde(default)]
    interfaces: Vec<TypeRef>,
    #[serde(default)]
    members: Vec<Member>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeDefinitionRef<'a> {
    #[serde(flatten)]
    attrs: &'a MemberAttrs,
    #[serde(rename = "ref")]
    type_ref: &'a TypeRef,
    kind: TypeKind,
    is_abstract: bool,
    #[serde(skip_serializing_if = "<[TypeParam]>::is_empty")]
    type_params: &'a [TypeParam],
    super_types: &'a [TypeRef],
    interfaces: &'a [TypeRef],
    members: &'a [Member],
}

impl Serialize for TypeDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawTypeDefinitionRef {
            attrs: &self.attrs,
            type_ref: &self.type_ref,
            kind: self.kind,
            is_abstract: self.is_abstract,
            type_params: &self.type_params,
            super_types: &self.super_types,
            interfaces: &self.interfaces,
            members: &self.members,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TypeDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawTypeDefinition::deserialize(deserializer)?;
        Ok(TypeDefinition::new(raw.type_ref, raw.kind)
            .with_attrs(raw.attrs)
            .with_abstract(raw.is_abstract)
            .with_type_params(raw.type_params)
            .with_super_types(raw.super_types)
            .with_interfaces(raw.interfaces)
            .with_members(raw.members))
    }
}

#[cfg(test)]
#[path = "tests/definition_tests.rs"]
mod tests;

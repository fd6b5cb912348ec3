//! Members of type definitions.
//!
//! Constructors, getters and setters are all methods that differ only in
//! their [`MethodKind`]. Accessors remember the name of the source method
//! they were derived from so conflict resolution can turn them back into
//! plain methods.

use serde::{Deserialize, Serialize};

use crate::definition::TypeDefinition;
use crate::type_ref::{TypeParam, TypeRef};

/// Attributes shared by every member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAttrs {
    /// Raw documentation comment, source markup not yet translated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub is_static: bool,
}

fn default_true() -> bool {
    true
}

impl MemberAttrs {
    pub fn public() -> Self {
        Self {
            doc: None,
            is_public: true,
            is_static: false,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(flatten)]
    pub attrs: MemberAttrs,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub is_final: bool,
}

/// Method parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub varargs: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            varargs: false,
        }
    }

    pub fn varargs(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            varargs: true,
        }
    }
}

/// Which flavour of method a [`Method`] is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum MethodKind {
    Plain,
    Constructor,
    Getter {
        #[serde(rename = "originalName")]
        original_name: String,
    },
    Setter {
        #[serde(rename = "originalName")]
        original_name: String,
    },
}

impl MethodKind {
    pub fn is_accessor(&self) -> bool {
        matches!(self, MethodKind::Getter { .. } | MethodKind::Setter { .. })
    }

    /// Whether `self` and `other` are the same kind, ignoring payloads.
    pub fn same_kind(&self, other: &MethodKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    #[serde(flatten)]
    pub attrs: MemberAttrs,
    /// Exposed name. For accessors this is the property name.
    pub name: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    #[serde(default)]
    pub is_override: bool,
    #[serde(flatten)]
    pub kind: MethodKind,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: TypeRef, params: Vec<Parameter>) -> Self {
        Self {
            attrs: MemberAttrs::public(),
            name: name.into(),
            return_type,
            params,
            type_params: Vec::new(),
            is_override: false,
            kind: MethodKind::Plain,
        }
    }

    /// Constructor of the type whose simple name is `type_name`.
    pub fn constructor(type_name: impl Into<String>, params: Vec<Parameter>) -> Self {
        Self {
            kind: MethodKind::Constructor,
            ..Self::new(type_name, TypeRef::VOID, params)
        }
    }

    /// Getter derived from the accessor method `original_name`
    /// (`getFoo` or `isFoo`).
    pub fn getter(original_name: impl Into<String>, ty: TypeRef) -> Self {
        let original_name = original_name.into();
        Self {
            kind: MethodKind::Getter {
                original_name: original_name.clone(),
            },
            ..Self::new(getter_property_name(&original_name), ty, Vec::new())
        }
    }

    /// Setter derived from the accessor method `original_name` (`setFoo`).
    pub fn setter(original_name: impl Into<String>, ty: TypeRef) -> Self {
        let original_name = original_name.into();
        let property = setter_property_name(&original_name);
        Self {
            kind: MethodKind::Setter {
                original_name: original_name.clone(),
            },
            ..Self::new(property.clone(), TypeRef::VOID, vec![Parameter::new(property, ty)])
        }
    }

    pub fn with_attrs(mut self, attrs: MemberAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_override(mut self, is_override: bool) -> Self {
        self.is_override = is_override;
        self
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeParam>) -> Self {
        self.type_params = type_params;
        self
    }

    /// Name of the source method, which differs from [`Method::name`] only
    /// for accessors.
    pub fn original_name(&self) -> &str {
        match &self.kind {
            MethodKind::Getter { original_name } | MethodKind::Setter { original_name } => {
                original_name
            }
            MethodKind::Plain | MethodKind::Constructor => &self.name,
        }
    }

    /// Turns an accessor back into a plain method named after the source
    /// accessor. Other kinds are returned unchanged.
    pub fn demote_accessor(self) -> Method {
        match self.kind {
            MethodKind::Getter { original_name } | MethodKind::Setter { original_name } => Method {
                name: original_name,
                kind: MethodKind::Plain,
                ..self
            },
            MethodKind::Plain | MethodKind::Constructor => self,
        }
    }
}

/// Property name exposed by a getter.
///
/// `getFoo` and `isFoo` expose `foo`; anything else is used as is.
pub fn getter_property_name(method_name: &str) -> String {
    if let Some(rest) = method_name.strip_prefix("is")
        && !rest.is_empty()
    {
        return decapitalize(rest);
    }
    if let Some(rest) = method_name.strip_prefix("get")
        && !rest.is_empty()
    {
        return decapitalize(rest);
    }
    method_name.to_string()
}

/// Property name exposed by a setter (`setFoo` exposes `foo`).
pub fn setter_property_name(method_name: &str) -> String {
    match method_name.strip_prefix("set") {
        Some(rest) if !rest.is_empty() => decapitalize(rest),
        _ => method_name.to_string(),
    }
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A member of a type definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Member {
    Field(Field),
    Method(Method),
    /// Nested type declaration.
    Type(Box<TypeDefinition>),
}

impl Member {
    /// Exposed name used for name-based lookups.
    ///
    /// Nested types report their qualified name, which never collides with
    /// a field or method name.
    pub fn name(&self) -> &str {
        match self {
            Member::Field(field) => &field.name,
            Member::Method(method) => &method.name,
            Member::Type(def) => def.qualified_name(),
        }
    }

    pub fn attrs(&self) -> &MemberAttrs {
        match self {
            Member::Field(field) => &field.attrs,
            Member::Method(method) => &method.attrs,
            Member::Type(def) => &def.attrs,
        }
    }

    pub fn attrs_mut(&mut self) -> &mut MemberAttrs {
        match self {
            Member::Field(field) => &mut field.attrs,
            Member::Method(method) => &mut method.attrs,
            Member::Type(def) => &mut def.attrs,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Member::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeDefinition> {
        match self {
            Member::Type(def) => Some(def),
            _ => None,
        }
    }

    pub fn is_accessor(&self) -> bool {
        self.as_method().is_some_and(|m| m.kind.is_accessor())
    }

    /// Every type reference this member mentions, excluding the contents of
    /// nested type definitions.
    pub fn walk_type_refs<'a>(&'a self, visitor: &mut impl FnMut(&'a TypeRef)) {
        match self {
            Member::Field(field) => field.ty.walk(visitor),
            Member::Method(method) => {
                method.return_type.walk(visitor);
                for param in &method.params {
                    param.ty.walk(visitor);
                }
                for tp in &method.type_params {
                    if let Some(bound) = &tp.bound {
                        bound.walk(visitor);
                    }
                }
            }
            Member::Type(_) => {}
        }
    }
}

impl From<Field> for Member {
    fn from(field: Field) -> Self {
        Member::Field(field)
    }
}

impl From<Method> for Member {
    fn from(method: Method) -> Self {
        Member::Method(method)
    }
}

impl From<TypeDefinition> for Member {
    fn from(def: TypeDefinition) -> Self {
        Member::Type(Box::new(def))
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            attrs: MemberAttrs::public(),
            name: name.into(),
            ty,
            is_final: false,
        }
    }

    pub fn with_attrs(mut self, attrs: MemberAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }
}

#[cfg(test)]
#[path = "tests/member_tests.rs"]
mod tests;

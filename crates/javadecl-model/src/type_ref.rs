//! Type references.
//!
//! A [`TypeRef`] names a type as it appears in a declaration: a field type,
//! a parameter, a return type or a supertype. Built-in pseudo-types (the
//! primitives, `java.lang.String` and `java.lang.Object`) are canonicalised
//! onto [`Builtin`] discriminants when a reference is constructed, so every
//! later special case matches on the enum instead of comparing strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in pseudo-types of the source language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Void,
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    String,
    Object,
}

impl Builtin {
    pub const ALL: [Builtin; 11] = [
        Builtin::Void,
        Builtin::Boolean,
        Builtin::Byte,
        Builtin::Short,
        Builtin::Char,
        Builtin::Int,
        Builtin::Long,
        Builtin::Float,
        Builtin::Double,
        Builtin::String,
        Builtin::Object,
    ];

    /// Name of the built-in as the extractor spells it.
    pub fn qualified_name(self) -> &'static str {
        match self {
            Builtin::Void => "void",
            Builtin::Boolean => "boolean",
            Builtin::Byte => "byte",
            Builtin::Short => "short",
            Builtin::Char => "char",
            Builtin::Int => "int",
            Builtin::Long => "long",
            Builtin::Float => "float",
            Builtin::Double => "double",
            Builtin::String => "java.lang.String",
            Builtin::Object => "java.lang.Object",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.qualified_name() == name)
    }

    /// Name of the target-language primitive this built-in maps to.
    ///
    /// Several numeric widths collapse onto `number`; this is what makes
    /// duplicate-signature removal necessary.
    pub fn target_name(self) -> &'static str {
        match self {
            Builtin::Void => "void",
            Builtin::Boolean => "boolean",
            Builtin::Byte
            | Builtin::Short
            | Builtin::Int
            | Builtin::Long
            | Builtin::Float
            | Builtin::Double => "number",
            Builtin::Char | Builtin::String => "string",
            Builtin::Object => "any",
        }
    }

    pub fn is_primitive(self) -> bool {
        !matches!(self, Builtin::String | Builtin::Object)
    }
}

/// Payload of [`TypeRef::Simple`].
///
/// Serialised as a plain string; deserialisation goes through
/// [`SimpleType::from`] so built-in names always land on [`Builtin`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SimpleType {
    Builtin(Builtin),
    Named(String),
}

impl SimpleType {
    pub fn name(&self) -> &str {
        match self {
            SimpleType::Builtin(b) => b.qualified_name(),
            SimpleType::Named(name) => name,
        }
    }
}

impl From<String> for SimpleType {
    fn from(name: String) -> Self {
        match Builtin::from_name(&name) {
            Some(builtin) => SimpleType::Builtin(builtin),
            None => SimpleType::Named(name),
        }
    }
}

impl From<SimpleType> for String {
    fn from(simple: SimpleType) -> Self {
        match simple {
            SimpleType::Builtin(b) => b.qualified_name().to_string(),
            SimpleType::Named(name) => name,
        }
    }
}

/// Bound of a source-language wildcard, before normalisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WildcardBound {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(TypeRef),
    /// `? super T`
    Super(TypeRef),
}

/// Reference to a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeRef {
    /// Named type, built-in or bare type variable.
    Simple(SimpleType),
    /// Array of `component` with `dimensions` levels.
    Array {
        component: Box<TypeRef>,
        dimensions: u32,
    },
    /// Generic instantiation.
    Parametrized { base: Box<TypeRef>, args: Vec<TypeRef> },
    /// Upper-bounded wildcard. Lower bounds are not representable.
    Wildcard { upper: Box<TypeRef> },
    /// Reference explicitly annotated as nullable.
    Nullable(Box<TypeRef>),
}

impl TypeRef {
    pub const VOID: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Void));
    pub const BOOLEAN: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Boolean));
    pub const BYTE: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Byte));
    pub const SHORT: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Short));
    pub const CHAR: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Char));
    pub const INT: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Int));
    pub const LONG: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Long));
    pub const FLOAT: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Float));
    pub const DOUBLE: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Double));
    pub const STRING: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::String));
    pub const OBJECT: TypeRef = TypeRef::Simple(SimpleType::Builtin(Builtin::Object));

    /// Reference to a named type; built-in names are canonicalised.
    pub fn simple(name: impl Into<String>) -> Self {
        TypeRef::Simple(SimpleType::from(name.into()))
    }

    pub fn array(component: TypeRef, dimensions: u32) -> Self {
        TypeRef::Array {
            component: Box::new(component),
            dimensions,
        }
    }

    pub fn parametrized(base: TypeRef, args: Vec<TypeRef>) -> Self {
        TypeRef::Parametrized {
            base: Box::new(base),
            args,
        }
    }

    /// Builds a wildcard reference.
    ///
    /// Only `? extends T` survives; `?` and `? super T` degrade to the
    /// universal object type.
    pub fn wildcard(bound: WildcardBound) -> Self {
        match bound {
            WildcardBound::Extends(upper) => TypeRef::Wildcard {
                upper: Box::new(upper),
            },
            WildcardBound::Unbounded | WildcardBound::Super(_) => TypeRef::OBJECT,
        }
    }

    pub fn nullable(self) -> Self {
        match self {
            already @ TypeRef::Nullable(_) => already,
            inner => TypeRef::Nullable(Box::new(inner)),
        }
    }

    /// Wraps this reference in `dimensions` more array levels.
    pub fn make_array(self, dimensions: u32) -> Self {
        match self {
            TypeRef::Array {
                component,
                dimensions: existing,
            } => TypeRef::Array {
                component,
                dimensions: existing + dimensions,
            },
            other => TypeRef::array(other, dimensions),
        }
    }

    /// The built-in this reference denotes, if it is a bare built-in.
    pub fn builtin(&self) -> Option<Builtin> {
        match self {
            TypeRef::Simple(SimpleType::Builtin(b)) => Some(*b),
            _ => None,
        }
    }

    /// Qualified display name.
    ///
    /// Parametrized references report their base name, arrays their
    /// component name followed by one `[]` per dimension and wildcards `*`.
    /// Nullability does not change the name.
    pub fn name(&self) -> String {
        match self {
            TypeRef::Simple(simple) => simple.name().to_string(),
            TypeRef::Array {
                component,
                dimensions,
            } => {
                let mut name = component.name();
                for _ in 0..*dimensions {
                    name.push_str("[]");
                }
                name
            }
            TypeRef::Parametrized { base, .. } => base.name(),
            TypeRef::Wildcard { .. } => "*".to_string(),
            TypeRef::Nullable(inner) => inner.name(),
        }
    }

    /// Last segment of [`TypeRef::name`].
    pub fn simple_name(&self) -> String {
        split_qualified(&self.name()).1.to_string()
    }

    /// Prefix of [`TypeRef::name`] before its last `.`, if any.
    pub fn namespace(&self) -> Option<String> {
        split_qualified(&self.name()).0.map(str::to_string)
    }

    /// Strips generic arguments and nullability.
    pub fn base_type(&self) -> &TypeRef {
        match self {
            TypeRef::Parametrized { base, .. } => base.base_type(),
            TypeRef::Nullable(inner) => inner.base_type(),
            other => other,
        }
    }

    /// Qualified name of a named (non built-in) simple reference.
    pub fn qualified_name(&self) -> Option<&str> {
        match self {
            TypeRef::Simple(SimpleType::Named(name)) => Some(name),
            _ => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, TypeRef::Nullable(_))
    }

    /// Visits this reference and every reference nested in it, pre-order.
    pub fn walk<'a>(&'a self, visitor: &mut impl FnMut(&'a TypeRef)) {
        visitor(self);
        match self {
            TypeRef::Simple(_) => {}
            TypeRef::Array { component, .. } => component.walk(visitor),
            TypeRef::Parametrized { base, args } => {
                base.walk(visitor);
                for arg in args {
                    arg.walk(visitor);
                }
            }
            TypeRef::Wildcard { upper } => upper.walk(visitor),
            TypeRef::Nullable(inner) => inner.walk(visitor),
        }
    }

    /// Whether any reference nested in this one satisfies `pred`.
    pub fn any(&self, pred: &mut impl FnMut(&TypeRef) -> bool) -> bool {
        let mut found = false;
        self.walk(&mut |ty| {
            if !found && pred(ty) {
                found = true;
            }
        });
        found
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Simple(simple) => f.write_str(simple.name()),
            TypeRef::Array {
                component,
                dimensions,
            } => {
                write!(f, "{component}")?;
                for _ in 0..*dimensions {
                    f.write_str("[]")?;
                }
                Ok(())
            }
            TypeRef::Parametrized { base, args } => {
                write!(f, "{base}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeRef::Wildcard { upper } => write!(f, "? extends {upper}"),
            TypeRef::Nullable(inner) => write!(f, "@Nullable {inner}"),
        }
    }
}

/// Splits a qualified name into its namespace prefix and simple name.
///
/// `a.b.Foo` gives `(Some("a.b"), "Foo")`; `T` gives `(None, "T")`.
pub fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.rfind('.') {
        Some(idx) => (Some(&name[..idx]), &name[idx + 1..]),
        None => (None, name),
    }
}

/// Generic type parameter declared on a type or method.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<TypeRef>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: None,
        }
    }

    pub fn bounded(name: impl Into<String>, bound: TypeRef) -> Self {
        Self {
            name: name.into(),
            bound: Some(bound),
        }
    }
}

#[cfg(test)]
#[path = "tests/type_ref_tests.rs"]
mod tests;

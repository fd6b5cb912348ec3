//! Signature identity of methods.

use std::fmt;

use javadecl_model::{Method, TypeRef};

/// `(source name, public flag, parameter display names)`.
///
/// Two methods with equal ids are the same overload once emitted. Built-in
/// parameter types contribute their target primitive name, so `int` and
/// `long` parameters compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodId {
    pub name: String,
    pub is_public: bool,
    pub param_types: Vec<String>,
}

impl MethodId {
    pub fn new(name: impl Into<String>, is_public: bool, param_types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            is_public,
            param_types,
        }
    }

    /// Accessors are identified by their source name (`getSize`), not the
    /// property they expose, so they never collide with a plain `size()`.
    pub fn of(method: &Method) -> Self {
        Self {
            name: method.original_name().to_string(),
            is_public: method.attrs.is_public,
            param_types: method.params.iter().map(|p| param_display_name(&p.ty)).collect(),
        }
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.param_types.join(", "))
    }
}

/// Display name of a parameter type as it takes part in a [`MethodId`].
///
/// Nullability is ignored; a nullable parameter is the same overload as its
/// non-null form.
pub fn param_display_name(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Simple(_) => match ty.builtin() {
            Some(builtin) => builtin.target_name().to_string(),
            None => ty.name(),
        },
        TypeRef::Array {
            component,
            dimensions,
        } => {
            let mut name = param_display_name(component);
            for _ in 0..*dimensions {
                name.push_str("[]");
            }
            name
        }
        TypeRef::Nullable(inner) => param_display_name(inner),
        TypeRef::Parametrized { .. } | TypeRef::Wildcard { .. } => ty.name(),
    }
}

#[cfg(test)]
#[path = "tests/method_id_tests.rs"]
mod tests;

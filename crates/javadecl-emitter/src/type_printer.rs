//! Type Printer - Convert TypeRef to TypeScript syntax

use javadecl_model::{TypeParam, TypeRef};

use crate::imports::{ImportTable, flatten_name};

/// Prints type references as TypeScript syntax using a module's name table.
pub struct TypePrinter<'a> {
    names: &'a ImportTable,
}

impl<'a> TypePrinter<'a> {
    pub fn new(names: &'a ImportTable) -> Self {
        Self { names }
    }

    pub fn print_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Simple(_) => match ty.builtin() {
                Some(builtin) => builtin.target_name().to_string(),
                None => self.print_named(&ty.name()),
            },
            TypeRef::Array {
                component,
                dimensions,
            } => {
                let mut out = match component.as_ref() {
                    TypeRef::Nullable(_) => format!("({})", self.print_type(component)),
                    _ => self.print_type(component),
                };
                for _ in 0..*dimensions {
                    out.push_str("[]");
                }
                out
            }
            TypeRef::Parametrized { base, args } => {
                let args: Vec<String> = args.iter().map(|arg| self.print_type(arg)).collect();
                format!("{}<{}>", self.print_type(base), args.join(", "))
            }
            // Upper bound only; `? extends X` has no TypeScript counterpart.
            TypeRef::Wildcard { upper } => self.print_type(upper),
            TypeRef::Nullable(inner) => format!("{} | null", self.print_type(inner)),
        }
    }

    fn print_named(&self, name: &str) -> String {
        match self.names.local_name(name) {
            Some(local) => local.to_string(),
            None => flatten_name(name),
        }
    }

    /// `<T, U extends Foo>`, or nothing when `params` is empty.
    pub fn print_type_params(&self, params: &[TypeParam]) -> String {
        if params.is_empty() {
            return String::new();
        }
        let params: Vec<String> = params
            .iter()
            .map(|param| match &param.bound {
                Some(bound) => format!("{} extends {}", param.name, self.print_type(bound)),
                None => param.name.clone(),
            })
            .collect();
        format!("<{}>", params.join(", "))
    }
}

#[cfg(test)]
#[path = "tests/type_printer_tests.rs"]
mod tests;

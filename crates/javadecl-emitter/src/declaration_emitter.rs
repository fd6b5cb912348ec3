//! Declaration emitter for one module.
//!
//! Every type is emitted as a class, since TypeScript interfaces cannot
//! declare accessors. A type with at most one supertype or interface
//! extends it directly:
//!
//! ```typescript
//! export class ArrayList<E> extends AbstractList<E> {
//!   size(): number;
//! }
//! ```
//!
//! A type with several uses declaration merging. The body goes into an
//! internal class, and the public name is an exported interface extending
//! the body and every parent, merged with an exported empty class:
//!
//! ```typescript
//! class ArrayList_Impl<E> {
//!   size(): number;
//! }
//! export interface ArrayList<E> extends ArrayList_Impl<E>, AbstractList<E>, RandomAccess {}
//! export class ArrayList<E> {}
//! ```
//!
//! Functional interfaces with a call method become callable interfaces.

use std::borrow::Cow;

use javadecl_model::{
    Field, Member, Method, MethodKind, Parameter, TypeDefinition, TypeKind, TypeRef,
};

use crate::doc_comment::write_doc_comment;
use crate::imports::ImportTable;
use crate::modules::Module;
use crate::source_writer::SourceWriter;
use crate::type_printer::TypePrinter;

const ITERABLE: &str = "java.lang.Iterable";

/// Suffix of the internal class holding a merged type's body.
pub const IMPL_SUFFIX: &str = "_Impl";

/// Declaration emitter for one `declare module` block.
pub struct DeclarationEmitter<'a> {
    writer: SourceWriter,
    names: &'a ImportTable,
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(names: &'a ImportTable, indent: &str) -> Self {
        DeclarationEmitter {
            writer: SourceWriter::with_capacity(4096, indent),
            names,
        }
    }

    /// Emits the module block: imports, then every type of the module.
    pub fn emit_module(mut self, module: &Module<'_>) -> String {
        self.writer.write("declare module '");
        self.writer.write(&module.name);
        self.writer.write("' {");
        self.writer.write_line();
        self.writer.increase_indent();

        self.names.write_imports(&mut self.writer);
        if !self.names.imports().is_empty() {
            self.writer.write_line();
        }
        for (i, def) in module.types.iter().enumerate() {
            if i > 0 {
                self.writer.write_line();
            }
            self.emit_type(def);
        }

        self.writer.decrease_indent();
        self.writer.write("}");
        self.writer.write_line();
        self.writer.finish()
    }

    /// Emits one type declaration without its nested types.
    pub fn emit_type(&mut self, def: &TypeDefinition) {
        if let Some(doc) = &def.attrs.doc {
            write_doc_comment(&mut self.writer, doc);
        }
        if def.kind == TypeKind::FunctionalInterface
            && let Some(call) = call_method(def)
        {
            self.emit_functional_interface(def, call);
            return;
        }
        self.emit_class(def);
    }

    pub fn finish(self) -> String {
        self.writer.finish()
    }

    fn printer(&self) -> TypePrinter<'a> {
        TypePrinter::new(self.names)
    }

    fn emit_class(&mut self, def: &TypeDefinition) {
        let printer = self.printer();
        let parents: Vec<&TypeRef> = def.ancestors().collect();
        let name = def.simple_name();
        let params = self.type_params_decl(def);
        let abstract_kw = if def.is_abstract { "abstract " } else { "" };

        if parents.len() <= 1 {
            self.writer.write_indent();
            self.writer.write(&format!("export {abstract_kw}class {name}{params}"));
            if let Some(parent) = parents.first() {
                self.writer.write(" extends ");
                self.writer.write(&printer.print_type(parent));
            }
            self.writer.write(" {");
            self.writer.write_line();
            self.emit_body(def);
            self.writer.write_indent();
            self.writer.write("}");
            self.writer.write_line();
            return;
        }

        let impl_name = format!("{name}{IMPL_SUFFIX}");
        self.writer.write_indent();
        self.writer.write(&format!("{abstract_kw}class {impl_name}{params} {{"));
        self.writer.write_line();
        self.emit_body(def);
        self.writer.write_indent();
        self.writer.write("}");
        self.writer.write_line();

        let mut extends = vec![format!("{impl_name}{}", self.type_args(def))];
        extends.extend(parents.iter().map(|parent| printer.print_type(parent)));
        self.writer.write_indent();
        self.writer.write(&format!(
            "export interface {name}{params} extends {} {{}}",
            extends.join(", ")
        ));
        self.writer.write_line();
        self.writer.write_indent();
        self.writer.write(&format!("export {abstract_kw}class {name}{params} {{}}"));
        self.writer.write_line();
    }

    fn emit_body(&mut self, def: &TypeDefinition) {
        self.writer.increase_indent();
        if def.qualified_name() == ITERABLE {
            let element = def
                .type_params
                .first()
                .map(|param| param.name.as_str())
                .unwrap_or("T");
            self.writer.write_indent();
            self.writer.write(&format!(
                "[Symbol.iterator](): globalThis.Iterator<{element}>;"
            ));
            self.writer.write_line();
        }
        for member in def.members() {
            if !member.attrs().is_public {
                continue;
            }
            match member {
                Member::Field(field) => self.emit_field(field),
                Member::Method(method) => self.emit_method(method),
                // Nested types are emitted in their own module.
                Member::Type(_) => {}
            }
        }
        self.writer.decrease_indent();
    }

    fn emit_functional_interface(&mut self, def: &TypeDefinition, call: &Method) {
        let printer = self.printer();
        let params = self.type_params_decl(def);
        self.writer.write_indent();
        self.writer.write(&format!("export interface {}{params} {{", def.simple_name()));
        self.writer.write_line();
        self.writer.increase_indent();
        if let Some(doc) = &call.attrs.doc {
            write_doc_comment(&mut self.writer, doc);
        }
        let signature = format!(
            "{}({}): {};",
            printer.print_type_params(&call.type_params),
            self.print_params(&call.params),
            printer.print_type(&call.return_type)
        );
        self.writer.write_indent();
        self.writer.write(&signature);
        self.writer.write_line();
        self.writer.decrease_indent();
        self.writer.write_indent();
        self.writer.write("}");
        self.writer.write_line();
    }

    fn emit_field(&mut self, field: &Field) {
        if let Some(doc) = &field.attrs.doc {
            write_doc_comment(&mut self.writer, doc);
        }
        self.writer.write_indent();
        if field.attrs.is_static {
            self.writer.write("static ");
        }
        if field.is_final {
            self.writer.write("readonly ");
        }
        let ty = self.printer().print_type(&field.ty);
        self.writer.write(&format!("{}: {ty};", field.name));
        self.writer.write_line();
    }

    fn emit_method(&mut self, method: &Method) {
        let printer = self.printer();
        if let Some(doc) = &method.attrs.doc {
            write_doc_comment(&mut self.writer, doc);
        }
        self.writer.write_indent();
        if method.attrs.is_static && method.kind != MethodKind::Constructor {
            self.writer.write("static ");
        }
        let params = self.print_params(&method.params);
        let line = match &method.kind {
            MethodKind::Constructor => format!("constructor({params});"),
            MethodKind::Getter { .. } => format!(
                "get {}(): {};",
                method.name,
                printer.print_type(&method.return_type)
            ),
            MethodKind::Setter { .. } => format!("set {}({params});", method.name),
            MethodKind::Plain => format!(
                "{}{}({params}): {};",
                method.name,
                printer.print_type_params(&method.type_params),
                printer.print_type(&method.return_type)
            ),
        };
        self.writer.write(&line);
        self.writer.write_line();
    }

    fn print_params(&self, params: &[Parameter]) -> String {
        let printer = self.printer();
        let params: Vec<String> = params
            .iter()
            .map(|param| {
                let name = safe_param_name(&param.name);
                let mut ty = printer.print_type(&param.ty);
                if !param.varargs {
                    return format!("{name}: {ty}");
                }
                match &param.ty {
                    TypeRef::Array { .. } => {}
                    TypeRef::Nullable(_) => ty = format!("({ty})[]"),
                    _ => ty.push_str("[]"),
                }
                format!("...{name}: {ty}")
            })
            .collect();
        params.join(", ")
    }

    /// Type parameters as declared: `<T extends Foo>`. Falls back to the
    /// arguments of the type's self reference when none are declared.
    fn type_params_decl(&self, def: &TypeDefinition) -> String {
        if !def.type_params.is_empty() {
            return self.printer().print_type_params(&def.type_params);
        }
        self.type_args(def)
    }

    /// Type parameters as arguments: `<T>`.
    fn type_args(&self, def: &TypeDefinition) -> String {
        if !def.type_params.is_empty() {
            let names: Vec<&str> = def.type_params.iter().map(|p| p.name.as_str()).collect();
            return format!("<{}>", names.join(", "));
        }
        match &def.type_ref {
            TypeRef::Parametrized { args, .. } if !args.is_empty() => {
                let printer = self.printer();
                let args: Vec<String> = args.iter().map(|arg| printer.print_type(arg)).collect();
                format!("<{}>", args.join(", "))
            }
            _ => String::new(),
        }
    }
}

/// Method used as the call signature of a functional interface: the first
/// public, non-static plain method.
fn call_method(def: &TypeDefinition) -> Option<&Method> {
    def.members()
        .iter()
        .filter_map(Member::as_method)
        .find(|m| m.kind == MethodKind::Plain && !m.attrs.is_static && m.attrs.is_public)
}

/// Words that cannot name a parameter in the target.
const RESERVED_WORDS: &[&str] = &[
    "arguments",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "if",
    "implements",
    "import",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "yield",
];

pub fn safe_param_name(name: &str) -> Cow<'_, str> {
    match name {
        "function" => Cow::Borrowed("func"),
        "in" => Cow::Borrowed("in_"),
        "default" => Cow::Borrowed("default_"),
        "with" => Cow::Borrowed("with_"),
        _ if RESERVED_WORDS.contains(&name) => Cow::Owned(format!("{name}_")),
        _ => Cow::Borrowed(name),
    }
}

#[cfg(test)]
#[path = "tests/declaration_emitter_tests.rs"]
mod tests;

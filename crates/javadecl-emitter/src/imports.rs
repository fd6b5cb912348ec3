//! Per-module name tables and import statements.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use javadecl_model::{TypeRef, split_qualified};

use crate::modules::Module;
use crate::source_writer::SourceWriter;

/// One imported type: its simple name in the source module and the local
/// alias, if it needed one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportedName {
    pub name: String,
    pub alias: Option<String>,
}

/// `import { ... } from '<from>';`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportLine {
    pub from: String,
    pub names: Vec<ImportedName>,
}

/// Local names of every type a module mentions.
///
/// The module's own types claim their simple names first. Every other
/// qualified reference then claims its simple name, or falls back to the
/// qualified name with `.` replaced by `_` when that simple name is taken.
/// Built-ins and bare type variables are never entered.
#[derive(Clone, Debug, Default)]
pub struct ImportTable {
    module: String,
    local_names: IndexMap<String, String>,
    imports: Vec<ImportLine>,
}

impl ImportTable {
    pub fn resolve(module: &Module<'_>) -> Self {
        let mut table = ImportTable {
            module: module.name.clone(),
            ..Self::default()
        };
        let mut claimed: FxHashSet<String> = FxHashSet::default();

        for def in &module.types {
            let qualified = def.qualified_name();
            let simple = def.simple_name();
            claimed.insert(simple.to_string());
            table
                .local_names
                .insert(qualified.to_string(), simple.to_string());
        }
        for def in &module.types {
            def.walk_type_refs(&mut |ty| table.claim(ty, &mut claimed));
        }
        table.imports = table.build_imports();
        table
    }

    fn claim(&mut self, ty: &TypeRef, claimed: &mut FxHashSet<String>) {
        let Some(qualified) = ty.qualified_name() else {
            return;
        };
        if self.local_names.contains_key(qualified) {
            return;
        }
        let (Some(_), simple) = split_qualified(qualified) else {
            return;
        };
        let local = if claimed.contains(simple) {
            flatten_name(qualified)
        } else {
            claimed.insert(simple.to_string());
            simple.to_string()
        };
        self.local_names.insert(qualified.to_string(), local);
    }

    fn build_imports(&self) -> Vec<ImportLine> {
        let mut by_namespace: IndexMap<&str, Vec<ImportedName>> = IndexMap::new();
        for (qualified, local) in &self.local_names {
            let (Some(namespace), simple) = split_qualified(qualified) else {
                continue;
            };
            if namespace == self.module {
                continue;
            }
            by_namespace.entry(namespace).or_default().push(ImportedName {
                name: simple.to_string(),
                alias: (local != simple).then(|| local.clone()),
            });
        }
        by_namespace.sort_keys();
        by_namespace
            .into_iter()
            .map(|(from, mut names)| {
                names.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.alias.cmp(&b.alias)));
                ImportLine {
                    from: from.to_string(),
                    names,
                }
            })
            .collect()
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Local name of a qualified type, if the module mentions it.
    pub fn local_name(&self, qualified: &str) -> Option<&str> {
        self.local_names.get(qualified).map(String::as_str)
    }

    pub fn imports(&self) -> &[ImportLine] {
        &self.imports
    }

    pub fn write_imports(&self, writer: &mut SourceWriter) {
        for line in &self.imports {
            writer.write_indent();
            writer.write("import { ");
            for (i, name) in line.names.iter().enumerate() {
                if i > 0 {
                    writer.write(", ");
                }
                writer.write(&name.name);
                if let Some(alias) = &name.alias {
                    writer.write(" as ");
                    writer.write(alias);
                }
            }
            writer.write(" } from '");
            writer.write(&line.from);
            writer.write("';");
            writer.write_line();
        }
    }
}

/// `a.b.Foo` as `a_b_Foo`.
pub fn flatten_name(qualified: &str) -> String {
    qualified.replace('.', "_")
}

#[cfg(test)]
#[path = "tests/imports_tests.rs"]
mod tests;

//! Module partitioning and output-file grouping.
//!
//! A definition belongs to the module named by its namespace. Nested
//! definitions go to the module named after their own namespace, which is
//! the enclosing type's qualified name. Modules are grouped into files by
//! the first two namespace segments.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use javadecl_model::{TypeDefinition, TypeTable};

/// Definitions declared under one module name, in table order.
#[derive(Clone, Debug)]
pub struct Module<'a> {
    pub name: String,
    pub types: Vec<&'a TypeDefinition>,
}

/// Modules that share one output file, sorted by name.
#[derive(Clone, Debug)]
pub struct FileGroup<'a> {
    pub key: String,
    pub modules: Vec<Module<'a>>,
}

impl FileGroup<'_> {
    /// Output file name, relative to the output directory.
    pub fn file_name(&self) -> String {
        format!("{}.d.ts", self.key)
    }
}

/// Splits the table into modules, sorted by module name.
///
/// Non-public definitions are left out together with everything nested in
/// them. Definitions in the default (empty) namespace cannot be named by a
/// module and are skipped with a warning.
pub fn partition(table: &TypeTable) -> Vec<Module<'_>> {
    let mut modules: BTreeMap<String, Vec<&TypeDefinition>> = BTreeMap::new();
    for def in table.definitions() {
        collect(def, &mut modules);
    }
    debug!(modules = modules.len(), "partitioned definitions");
    modules
        .into_iter()
        .map(|(name, types)| Module { name, types })
        .collect()
}

fn collect<'a>(def: &'a TypeDefinition, modules: &mut BTreeMap<String, Vec<&'a TypeDefinition>>) {
    if !def.attrs.is_public {
        return;
    }
    let namespace = def.namespace();
    if namespace.is_empty() {
        warn!(name = def.qualified_name(), "skipping type in the default namespace");
    } else {
        modules.entry(namespace.to_string()).or_default().push(def);
    }
    for nested in def.nested_types() {
        collect(nested, modules);
    }
}

/// First two segments of a module name.
pub fn file_key(module_name: &str) -> &str {
    match module_name.match_indices('.').nth(1) {
        Some((idx, _)) => &module_name[..idx],
        None => module_name,
    }
}

/// Groups modules into files by [`file_key`]. Files are sorted by key and
/// modules within a file by name.
pub fn group_files(modules: Vec<Module<'_>>) -> Vec<FileGroup<'_>> {
    let mut files: BTreeMap<String, Vec<Module<'_>>> = BTreeMap::new();
    for module in modules {
        files.entry(file_key(&module.name).to_string()).or_default().push(module);
    }
    files
        .into_iter()
        .map(|(key, mut modules)| {
            modules.sort_by(|a, b| a.name.cmp(&b.name));
            FileGroup { key, modules }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/modules_tests.rs"]
mod tests;

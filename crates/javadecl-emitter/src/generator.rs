//! Whole-table declaration generation.

use rayon::prelude::*;
use tracing::{debug, trace};

use javadecl_model::TypeTable;

use crate::declaration_emitter::DeclarationEmitter;
use crate::imports::ImportTable;
use crate::modules::{FileGroup, Module, group_files, partition};

/// Name of the optional file referencing every generated file.
pub const INDEX_FILE: &str = "index.d.ts";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Text repeated once per indentation level.
    pub indent: String,
    /// Also produce [`INDEX_FILE`].
    pub emit_index: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            indent: "  ".to_string(),
            emit_index: false,
        }
    }
}

/// A generated file, named relative to the output directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub content: String,
}

/// Turns a reconciled type table into declaration files.
#[derive(Clone, Debug, Default)]
pub struct DeclarationGenerator {
    options: EmitOptions,
}

impl DeclarationGenerator {
    pub fn new(options: EmitOptions) -> Self {
        DeclarationGenerator { options }
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Generates one file per file group, sorted by name, followed by the
    /// index file when enabled. Files are emitted in parallel.
    pub fn generate(&self, table: &TypeTable) -> Vec<OutputFile> {
        let files = group_files(partition(table));
        let mut outputs: Vec<OutputFile> =
            files.par_iter().map(|file| self.emit_file(file)).collect();
        if self.options.emit_index && !outputs.is_empty() {
            outputs.push(index_file(&outputs));
        }
        debug!(files = outputs.len(), "generated declaration files");
        outputs
    }

    pub fn emit_file(&self, file: &FileGroup<'_>) -> OutputFile {
        let mut content = String::new();
        for (i, module) in file.modules.iter().enumerate() {
            if i > 0 {
                content.push('\n');
            }
            content.push_str(&self.emit_module(module));
        }
        OutputFile {
            name: file.file_name(),
            content,
        }
    }

    pub fn emit_module(&self, module: &Module<'_>) -> String {
        let names = ImportTable::resolve(module);
        trace!(
            module = %module.name,
            types = module.types.len(),
            imports = names.imports().len(),
            "emitting module"
        );
        DeclarationEmitter::new(&names, &self.options.indent).emit_module(module)
    }
}

fn index_file(files: &[OutputFile]) -> OutputFile {
    let mut content = String::new();
    for file in files {
        content.push_str("/// <reference path=\"");
        content.push_str(&file.name);
        content.push_str("\" />\n");
    }
    OutputFile {
        name: INDEX_FILE.to_string(),
        content,
    }
}

#[cfg(test)]
#[path = "tests/generator_tests.rs"]
mod tests;

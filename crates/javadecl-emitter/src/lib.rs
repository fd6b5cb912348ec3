//! Declaration-file emission for the javadecl generator.
//!
//! Turns a reconciled type table into TypeScript declaration files:
//! - `modules`: partition definitions into modules and modules into files
//! - `imports`: per-module name tables with collision-safe aliases
//! - `type_printer`: type references as TypeScript syntax
//! - `doc_comment`: source documentation to TSDoc comment blocks
//! - `declaration_emitter`: class, mixin and callable-interface declarations
//! - `generator`: the whole-table driver

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod doc_comment;

pub mod modules;
pub use modules::{FileGroup, Module, file_key, group_files, partition};

pub mod imports;
pub use imports::{ImportLine, ImportTable, ImportedName};

pub mod type_printer;
pub use type_printer::TypePrinter;

pub mod declaration_emitter;
pub use declaration_emitter::DeclarationEmitter;

pub mod generator;
pub use generator::{DeclarationGenerator, EmitOptions, INDEX_FILE, OutputFile};

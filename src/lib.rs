//! javadecl: TypeScript declaration files from extracted Java type
//! declarations.
//!
//! The pipeline is split across the workspace crates:
//! - `javadecl_model`: type references, members, definitions, the type table
//! - `javadecl_reconcile`: overload, documentation and member-name passes
//! - `javadecl_emitter`: module partitioning, imports and `.d.ts` text
//!
//! This crate adds the driver around them: configuration, input loading,
//! filtering and output writing.

pub use javadecl_emitter as emitter;
pub use javadecl_model as model;
pub use javadecl_reconcile as reconcile;

pub mod cli;
pub mod tracing_config;

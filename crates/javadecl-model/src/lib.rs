//! Type model for the javadecl declaration generator.
//!
//! This crate provides the in-memory representation that every later phase
//! works on:
//! - Type references (`TypeRef`, `Builtin`, `TypeParam`)
//! - Members (`Member`, `Field`, `Method`, `MethodKind`, `Parameter`)
//! - Type definitions (`TypeDefinition`, `TypeKind`)
//! - The qualified-name lookup table (`TypeTable`)
//! - The name blacklist applied at the extractor boundary (`Blacklist`)

// Type references and built-in pseudo-types
pub mod type_ref;
pub use type_ref::{Builtin, SimpleType, TypeParam, TypeRef, WildcardBound, split_qualified};

// Members
pub mod member;
pub use member::{Field, Member, MemberAttrs, Method, MethodKind, Parameter};

// Type definitions
pub mod definition;
pub use definition::{TypeDefinition, TypeKind};

// Qualified-name lookup table
pub mod table;
pub use table::TypeTable;

// Blacklist filtering
pub mod blacklist;
pub use blacklist::Blacklist;

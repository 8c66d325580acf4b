//! # novagen IR
//!
//! Field resolution for novagen. This crate turns schema metadata into
//! field descriptions:
//!
//! - **Catalog**: column type category → candidate field types
//! - **Pool**: the columns still waiting to become fields
//! - **Builder**: per-field rules, visibility exceptions and sortability
//! - **Relationship**: fields synthesized from declared relations
//! - **Schema**: schema files and the provider that serves them
//!

// Module declarations
pub mod builder;
pub mod catalog;
pub mod field;
pub mod pool;
pub mod relationship;
pub mod schema;

// Re-export commonly used types at crate root
pub use builder::{FieldsBuilder, VISIBILITY_METHODS, derive_rules, is_visibility_method};
pub use catalog::{default_option_for, normalize_type, options_for};
pub use field::{FieldList, FieldSpec, OutputField, RelationshipFieldSpec, class_basename};
pub use pool::FieldCandidatePool;
pub use relationship::{RelationFieldTypes, RelationshipResolver};
pub use schema::{ModelSchema, SchemaFile, StaticSchemaProvider, load_schema};

// Re-export core types that are commonly used with IR
pub use novagen_core::{
    ColumnDescriptor, EngineError, EngineResult, Nullability, RelationDescriptor, RelationKind,
    SchemaProvider,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

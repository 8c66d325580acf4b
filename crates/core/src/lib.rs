//! # novagen Core
//!
//! Core types, traits, and error handling for novagen.
//!
//! This crate provides the foundational building blocks shared by the
//! other crates:
//!
//! - **Types**: Column and relation descriptors read from a model schema
//! - **Traits**: The `SchemaProvider` and `Interaction` capabilities
//! - **Errors**: Unified error handling with `EngineError` and `EngineResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{EngineError, EngineResult, ResultExt};
pub use traits::{Interaction, SchemaProvider, Validatable};
pub use types::{ColumnDescriptor, Nullability, RelationDescriptor, RelationKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

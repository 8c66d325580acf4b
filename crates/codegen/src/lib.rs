//! # novagen Codegen
//!
//! Field assembly and emission for novagen.
//!
//! This crate drives a run end to end: it resolves the model through a
//! [`SchemaProvider`](novagen_core::SchemaProvider), assembles the field list
//! interactively or automatically, and renders the result.
//!
//! ## Features
//!
//! - **Assembler**: the interactive wizard and the automatic pass
//! - **Config**: timestamp skipping, relation field table, output format
//! - **Emit**: resource `fields()` method or JSON
//! - **Interaction**: a scripted [`Interaction`](novagen_core::Interaction)
//!   for tests and non-terminal callers
//!

// ============================================================================
// Modules
// ============================================================================

pub mod assembler;
pub mod config;
pub mod emit;
pub mod generator;
pub mod interaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use assembler::{FieldAssembler, RunMode, prompts};
pub use config::{
    DEFAULT_IGNORED_TIMESTAMPS, DEFAULT_RESOURCE_NAMESPACE, GeneratorConfig, OutputFormat,
};
pub use emit::{render, render_json, render_php, render_php_at};
pub use generator::{GeneratedOutput, Generator};
pub use interaction::{ScriptedAnswer, ScriptedInteraction, TranscriptEntry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

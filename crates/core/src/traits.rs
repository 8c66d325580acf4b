//! Core traits for novagen
//!
//! The generator never inspects models or talks to a terminal itself. It is
//! handed two capabilities: a [`SchemaProvider`] that resolves model
//! identities and reports their columns and relations, and an
//! [`Interaction`] that asks the operator questions.

use crate::error::EngineResult;
use crate::types::{ColumnDescriptor, RelationDescriptor};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or an `EngineError` describing the problem.
    fn validate(&self) -> EngineResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// SchemaProvider Trait
// ============================================================================

/// Source of model metadata
///
/// Implementations decide how an identity maps to a model (registry lookup,
/// schema file, live database). The generator only sees the results.
pub trait SchemaProvider {
    /// Resolve an operator-supplied identity to the canonical model identity
    ///
    /// Fails with `EngineError::ModelResolution` naming `identity` when no
    /// persisted entity matches.
    fn resolve_model(&self, identity: &str) -> EngineResult<String>;

    /// Columns of a resolved model, in schema-declaration order
    fn columns_of(&self, model: &str) -> EngineResult<Vec<ColumnDescriptor>>;

    /// Relations declared on a resolved model, in declaration order
    fn relations_of(&self, model: &str) -> EngineResult<Vec<RelationDescriptor>>;
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for &P {
    fn resolve_model(&self, identity: &str) -> EngineResult<String> {
        (**self).resolve_model(identity)
    }

    fn columns_of(&self, model: &str) -> EngineResult<Vec<ColumnDescriptor>> {
        (**self).columns_of(model)
    }

    fn relations_of(&self, model: &str) -> EngineResult<Vec<RelationDescriptor>> {
        (**self).relations_of(model)
    }
}

// ============================================================================
// Interaction Trait
// ============================================================================

/// Blocking operator interaction
///
/// Each call is one round-trip: it suspends the run until the operator
/// answers.
pub trait Interaction {
    /// Ask a free-form question
    fn ask(&mut self, prompt: &str) -> EngineResult<String>;

    /// Ask the operator to pick one of `options`; returns the picked option
    fn choice(&mut self, prompt: &str, options: &[String]) -> EngineResult<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> EngineResult<bool>;

    /// Display a table
    fn table(&mut self, headers: &[String], rows: &[Vec<String>]) -> EngineResult<()>;
}

// ============================================================================
// Tests
// ============================================================================

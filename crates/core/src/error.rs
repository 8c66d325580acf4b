//! Error types for novagen
//!
//! This module provides unified error handling across the generator:
//! model resolution failures, empty schemas, builder misuse, schema and
//! configuration loading errors, and interaction failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for novagen
#[derive(Debug, Error)]
pub enum EngineError {
    // ========================================================================
    // Run Errors
    // ========================================================================
    /// The model identity does not name a known persisted entity
    #[error("Model {model} doesn't exist!")]
    ModelResolution { model: String },

    /// The model resolved, but it has neither columns nor relationships
    #[error("No columns found for the model {model}")]
    EmptySchema { model: String },

    /// Every column was skipped and no relationship produced a field
    #[error("No fields could be generated for the model {model}")]
    NoFieldsGenerated { model: String },

    /// A builder or pool operation was called out of order
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),

    /// The interaction boundary failed to produce an answer
    #[error("Interaction failed: {0}")]
    Interaction(String),

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ========================================================================
    // Schema & Configuration Errors
    // ========================================================================
    /// Schema file could not be parsed or is inconsistent
    #[error("Invalid schema file '{path}': {message}")]
    InvalidSchema { path: PathBuf, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl EngineError {
    /// Create a model resolution error naming the attempted identity
    pub fn model_resolution(model: impl Into<String>) -> Self {
        EngineError::ModelResolution {
            model: model.into(),
        }
    }

    /// Create an empty schema error
    pub fn empty_schema(model: impl Into<String>) -> Self {
        EngineError::EmptySchema {
            model: model.into(),
        }
    }

    /// Create an invalid usage error
    pub fn invalid_usage(msg: impl Into<String>) -> Self {
        EngineError::InvalidUsage(msg.into())
    }

    /// Create an interaction error
    pub fn interaction(msg: impl Into<String>) -> Self {
        EngineError::Interaction(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        EngineError::Validation(msg.into())
    }

    /// Create an invalid schema error for the given file
    pub fn invalid_schema(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        EngineError::InvalidSchema {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        EngineError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error means the schema has nothing to generate from
    pub fn is_empty_schema(&self) -> bool {
        matches!(
            self,
            EngineError::EmptySchema { .. } | EngineError::NoFieldsGenerated { .. }
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            EngineError::Io(_) | EngineError::FileRead { .. } | EngineError::FileWrite { .. }
        )
    }
}

/// Result type alias using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> EngineResult<T>;
}

impl<T, E: Into<EngineError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> EngineResult<T> {
        self.map_err(|e| {
            let err: EngineError = e.into();
            EngineError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_resolution_names_identity() {
        let err = EngineError::model_resolution("App\\Models\\Ghost");
        assert_eq!(err.to_string(), "Model App\\Models\\Ghost doesn't exist!");
        assert!(!err.is_empty_schema());
    }

    #[test]
    fn test_empty_schema_classification() {
        let err = EngineError::empty_schema("Post");
        assert!(err.is_empty_schema());
        assert_eq!(err.to_string(), "No columns found for the model Post");

        let err = EngineError::NoFieldsGenerated {
            model: "Post".to_string(),
        };
        assert!(err.is_empty_schema());
    }

    #[test]
    fn test_invalid_schema_error() {
        let err = EngineError::invalid_schema("schema.json", "expected `models`");
        assert_eq!(
            err.to_string(),
            "Invalid schema file 'schema.json': expected `models`"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = EngineError::with_context("Loading schema", "Permission denied");
        assert_eq!(err.to_string(), "Loading schema: Permission denied");
    }

    #[test]
    fn test_result_ext_wraps_io_error() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = res.with_context("Reading config").unwrap_err();
        assert_eq!(err.to_string(), "Reading config: IO error: file not found");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EngineError = io_err.into();
        assert!(err.is_io());
    }
}

//! # Generator Orchestrator
//!
//! The `Generator` is the top-level entry point. It runs the
//! [`FieldAssembler`] against a schema provider and renders the result.
//!
//! ## Pipeline
//!
//! ```text
//! SchemaProvider + RunMode + GeneratorConfig
//!         │
//!         ▼
//!   FieldAssembler::run()   → FieldList
//!         │
//!         ▼
//!   emit::render()          → String
//!         │
//!         ▼
//!   GeneratedOutput { fields, content, format }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use novagen_codegen::{Generator, GeneratorConfig, RunMode, ScriptedInteraction};
//! use novagen_ir::StaticSchemaProvider;
//!
//! let provider = StaticSchemaProvider::from_path("schema.toml")?;
//! let mode = RunMode::select(Some("Post".to_string()));
//!
//! let output = Generator::with_defaults().generate(&provider, &mode, &mut ScriptedInteraction::new())?;
//! output.write_to_disk("nova/PostFields.php")?;
//! ```

use novagen_core::{EngineError, EngineResult, Interaction, SchemaProvider};
use novagen_ir::FieldList;
use std::path::Path;

use crate::assembler::{FieldAssembler, RunMode};
use crate::config::{GeneratorConfig, OutputFormat};
use crate::emit;

// ============================================================================
// GeneratedOutput
// ============================================================================

/// A rendered field list
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedOutput {
    /// The assembled fields
    pub fields: FieldList,

    /// Rendered text
    pub content: String,

    /// Format `content` is in
    pub format: OutputFormat,
}

impl GeneratedOutput {
    /// Write the rendered content, creating parent directories
    pub fn write_to_disk(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::FileWrite {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        std::fs::write(path, &self.content).map_err(|e| EngineError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), bytes = self.content.len(), "wrote field list");
        Ok(())
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Runs a generation and renders its result
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Assemble the field list for one model and render it
    ///
    /// Nothing is rendered unless assembly succeeds.
    pub fn generate<P: SchemaProvider + ?Sized>(
        &self,
        provider: &P,
        mode: &RunMode,
        io: &mut dyn Interaction,
    ) -> EngineResult<GeneratedOutput> {
        let fields = FieldAssembler::new(provider, &self.config).run(mode, io)?;
        let content = emit::render(&fields, &self.config)?;

        Ok(GeneratedOutput {
            fields,
            content,
            format: self.config.format,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ScriptedInteraction;
    use novagen_ir::{ColumnDescriptor, ModelSchema, StaticSchemaProvider};

    fn provider() -> StaticSchemaProvider {
        StaticSchemaProvider::default().with_model(
            ModelSchema::new("App\\Models\\Post")
                .with_column(ColumnDescriptor::required("id", "bigint"))
                .with_column(ColumnDescriptor::required("title", "varchar(191)")),
        )
    }

    fn automatic() -> RunMode {
        RunMode::select(Some("Post".to_string()))
    }

    #[test]
    fn test_generate_php() {
        let output = Generator::with_defaults()
            .generate(&provider(), &automatic(), &mut ScriptedInteraction::new())
            .unwrap();

        assert_eq!(output.format, OutputFormat::Php);
        assert_eq!(output.fields.len(), 2);
        assert!(output.content.contains("Text::make('Title', 'title')"));
        assert!(output.content.contains("Number::make('ID', 'id')"));
    }

    #[test]
    fn test_generate_json() {
        let generator = Generator::new(GeneratorConfig::default().with_format(OutputFormat::Json));
        let output = generator
            .generate(&provider(), &automatic(), &mut ScriptedInteraction::new())
            .unwrap();
        let parsed: FieldList = serde_json::from_str(&output.content).unwrap();
        assert_eq!(parsed, output.fields);
    }

    #[test]
    fn test_generate_fails_without_output() {
        let mode = RunMode::select(Some("Comment".to_string()));
        let err = Generator::with_defaults()
            .generate(&provider(), &mode, &mut ScriptedInteraction::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "Model Comment doesn't exist!");
    }

    #[test]
    fn test_write_to_disk_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nova").join("PostFields.php");

        let output = Generator::with_defaults()
            .generate(&provider(), &automatic(), &mut ScriptedInteraction::new())
            .unwrap();
        output.write_to_disk(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), output.content);
    }
}

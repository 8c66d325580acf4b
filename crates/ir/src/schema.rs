//! Schema files
//!
//! A schema file lists models with their columns and relations. It is the
//! stand-in for live model introspection: [`StaticSchemaProvider`] serves
//! the file's contents through the [`SchemaProvider`] capability.
//!
//! JSON and TOML are both accepted; the format follows the file extension.

use novagen_core::{
    ColumnDescriptor, EngineError, EngineResult, RelationDescriptor, SchemaProvider,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::field::class_basename;

// ============================================================================
// Constants
// ============================================================================

/// Namespaces tried, in order, when an identity is not found as given
pub const MODEL_NAMESPACES: &[&str] = &["App", "App\\Models"];

// ============================================================================
// Schema File
// ============================================================================

/// One model in a schema file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Fully qualified model identity, e.g. `App\Models\Post`
    pub name: String,

    /// Columns in schema-declaration order
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,

    /// Declared relations
    #[serde(default)]
    pub relations: Vec<RelationDescriptor>,
}

impl ModelSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            relations: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_relation(mut self, relation: RelationDescriptor) -> Self {
        self.relations.push(relation);
        self
    }
}

/// Contents of a schema file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub models: Vec<ModelSchema>,
}

impl SchemaFile {
    /// Parse JSON schema contents
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Parse TOML schema contents
    pub fn from_toml(source: &str) -> EngineResult<Self> {
        toml::from_str(source).map_err(|e| EngineError::validation(e.to_string()))
    }
}

/// Load a schema file, picking the parser from the extension
///
/// `.toml` files are read as TOML, everything else as JSON.
pub fn load_schema(path: impl AsRef<Path>) -> EngineResult<SchemaFile> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let parsed: Result<SchemaFile, String> = if is_toml {
        toml::from_str(&source).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&source).map_err(|e| e.to_string())
    };

    let schema = parsed.map_err(|message| EngineError::invalid_schema(path, message))?;
    tracing::debug!(path = %path.display(), models = schema.models.len(), "loaded schema file");
    Ok(schema)
}

// ============================================================================
// StaticSchemaProvider
// ============================================================================

/// [`SchemaProvider`] over an in-memory schema
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaProvider {
    schema: SchemaFile,
}

impl StaticSchemaProvider {
    pub fn new(schema: SchemaFile) -> Self {
        Self { schema }
    }

    /// Load a schema file and serve it
    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        load_schema(path).map(Self::new)
    }

    /// Add a model
    pub fn with_model(mut self, model: ModelSchema) -> Self {
        self.schema.models.push(model);
        self
    }

    /// Known model identities
    pub fn model_names(&self) -> Vec<&str> {
        self.schema.models.iter().map(|m| m.name.as_str()).collect()
    }

    fn find(&self, name: &str) -> Option<&ModelSchema> {
        let name = name.trim_start_matches('\\');
        self.schema
            .models
            .iter()
            .find(|m| m.name.trim_start_matches('\\') == name)
    }

    fn model(&self, model: &str) -> EngineResult<&ModelSchema> {
        self.find(model)
            .ok_or_else(|| EngineError::model_resolution(model))
    }
}

impl SchemaProvider for StaticSchemaProvider {
    /// Exact identity first, then the conventional model namespaces, then a
    /// unique match on the unqualified class name
    fn resolve_model(&self, identity: &str) -> EngineResult<String> {
        let identity = identity.trim();
        let bare = identity.trim_start_matches('\\');
        if bare.is_empty() {
            return Err(EngineError::model_resolution(identity));
        }

        if let Some(model) = self.find(bare) {
            return Ok(model.name.clone());
        }

        for namespace in MODEL_NAMESPACES {
            if let Some(model) = self.find(&format!("{}\\{}", namespace, bare)) {
                return Ok(model.name.clone());
            }
        }

        let mut by_basename = self
            .schema
            .models
            .iter()
            .filter(|m| class_basename(&m.name) == bare);
        match (by_basename.next(), by_basename.next()) {
            (Some(model), None) => Ok(model.name.clone()),
            _ => Err(EngineError::model_resolution(identity)),
        }
    }

    fn columns_of(&self, model: &str) -> EngineResult<Vec<ColumnDescriptor>> {
        Ok(self.model(model)?.columns.clone())
    }

    fn relations_of(&self, model: &str) -> EngineResult<Vec<RelationDescriptor>> {
        Ok(self.model(model)?.relations.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use novagen_core::RelationKind;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const POST_JSON: &str = r#"{
        "models": [
            {
                "name": "App\\Models\\Post",
                "columns": [
                    {"name": "id", "type": "bigint(20) unsigned", "nullable": "NO"},
                    {"name": "title", "type": "varchar(191)", "nullable": "NO"}
                ],
                "relations": [
                    {"name": "author", "kind": "belongs_to", "related": "App\\Models\\User"}
                ]
            },
            {"name": "App\\User"}
        ]
    }"#;

    const POST_TOML: &str = r#"
        [[models]]
        name = 'App\Models\Post'
        columns = [
            { name = "id", type = "bigint(20) unsigned", nullable = "NO" },
            { name = "body", type = "text", nullable = "YES" },
        ]
        relations = [
            { name = "comments", kind = "has_many", related = 'App\Models\Comment' },
        ]
    "#;

    fn provider() -> StaticSchemaProvider {
        StaticSchemaProvider::new(SchemaFile::from_json(POST_JSON).unwrap())
    }

    #[test]
    fn test_parse_json() {
        let schema = SchemaFile::from_json(POST_JSON).unwrap();
        assert_eq!(schema.models.len(), 2);
        assert_eq!(schema.models[0].columns[1], ColumnDescriptor::required("title", "varchar(191)"));
        assert!(schema.models[1].columns.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let schema = SchemaFile::from_toml(POST_TOML).unwrap();
        let post = &schema.models[0];
        assert_eq!(post.name, "App\\Models\\Post");
        assert!(post.columns[1].is_nullable());
        assert_eq!(post.relations[0].kind, RelationKind::HasMany);
    }

    #[test]
    fn test_resolve_exact_and_conventional_namespaces() {
        let provider = provider();
        assert_eq!(provider.resolve_model("App\\Models\\Post").unwrap(), "App\\Models\\Post");
        assert_eq!(provider.resolve_model("\\App\\Models\\Post").unwrap(), "App\\Models\\Post");
        assert_eq!(provider.resolve_model("Post").unwrap(), "App\\Models\\Post");
        assert_eq!(provider.resolve_model("User").unwrap(), "App\\User");
    }

    #[test]
    fn test_resolve_unknown_model_names_identity() {
        let err = provider().resolve_model("Ghost").unwrap_err();
        assert!(matches!(err, EngineError::ModelResolution { ref model } if model == "Ghost"));
        assert!(provider().resolve_model("  ").is_err());
    }

    #[test]
    fn test_ambiguous_basename_does_not_resolve() {
        let provider = StaticSchemaProvider::default()
            .with_model(ModelSchema::new("Blog\\Post"))
            .with_model(ModelSchema::new("Forum\\Post"));
        assert!(provider.resolve_model("Post").is_err());
        assert_eq!(provider.resolve_model("Forum\\Post").unwrap(), "Forum\\Post");
    }

    #[test]
    fn test_columns_and_relations() {
        let provider = provider();
        let columns = provider.columns_of("App\\Models\\Post").unwrap();
        assert_eq!(columns.len(), 2);
        let relations = provider.relations_of("App\\Models\\Post").unwrap();
        assert_eq!(relations[0].name, "author");
        assert!(provider.columns_of("App\\Models\\Ghost").is_err());
    }

    #[test]
    fn test_load_schema_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json.write_all(POST_JSON.as_bytes()).unwrap();
        assert_eq!(load_schema(json.path()).unwrap().models.len(), 2);

        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        toml_file.write_all(POST_TOML.as_bytes()).unwrap();
        let provider = StaticSchemaProvider::from_path(toml_file.path()).unwrap();
        assert_eq!(provider.model_names(), vec!["App\\Models\\Post"]);
    }

    #[test]
    fn test_load_schema_errors_name_the_path() {
        let mut bad = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        bad.write_all(b"{ not json").unwrap();
        let err = load_schema(bad.path()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSchema { .. }));

        let err = load_schema("/definitely/not/here.json").unwrap_err();
        assert!(err.is_io());
    }
}

//! # Generator Configuration
//!
//! [`GeneratorConfig`] carries every knob of a run: timestamp skipping in
//! automatic mode, the relation field table, and how the result is emitted.
//! It can be built in code or loaded from a TOML file:
//!
//! ```toml
//! ignore_timestamps = true
//! ignored_timestamp_columns = ["created_at", "updated_at", "deleted_at"]
//! resource_namespace = 'App\Nova'
//! format = "php"
//!
//! [relation_field_types]
//! morph_to = ""            # blank disables the kind
//! belongs_to_many = "Tag"
//! ```
//!
//! Entries under `relation_field_types` overlay the default table.

use novagen_core::{EngineError, EngineResult, Validatable};
use novagen_ir::RelationFieldTypes;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Column names skipped by default in automatic mode
pub const DEFAULT_IGNORED_TIMESTAMPS: &[&str] = &["created_at", "updated_at"];

/// Namespace of generated resources by default
pub const DEFAULT_RESOURCE_NAMESPACE: &str = "App\\Nova";

// ============================================================================
// OutputFormat
// ============================================================================

/// How a field list is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A resource `fields()` method
    #[default]
    Php,
    /// The field list as JSON
    Json,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Php => "php",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "php" => Ok(OutputFormat::Php),
            "json" => Ok(OutputFormat::Json),
            other => Err(EngineError::InvalidConfig(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Skip conventional timestamp columns in automatic mode
    pub ignore_timestamps: bool,

    /// Column names treated as auto-managed timestamps
    pub ignored_timestamp_columns: Vec<String>,

    /// Namespace of the resources relationship fields point to
    pub resource_namespace: String,

    /// Output format
    pub format: OutputFormat,

    /// Relation kind → field type table
    #[serde(deserialize_with = "overlay_default_relation_types")]
    pub relation_field_types: RelationFieldTypes,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ignore_timestamps: true,
            ignored_timestamp_columns: DEFAULT_IGNORED_TIMESTAMPS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            resource_namespace: DEFAULT_RESOURCE_NAMESPACE.to_string(),
            format: OutputFormat::default(),
            relation_field_types: RelationFieldTypes::default(),
        }
    }
}

fn overlay_default_relation_types<'de, D>(deserializer: D) -> Result<RelationFieldTypes, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = RelationFieldTypes::deserialize(deserializer)?;
    let mut table = RelationFieldTypes::default();
    table.merge(&overrides);
    Ok(table)
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML configuration
    pub fn from_toml(source: &str) -> EngineResult<Self> {
        toml::from_str(source).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }

    /// Load a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&source)?;
        config.validate()?;
        Ok(config)
    }

    /// Turn timestamp skipping on or off
    pub fn with_ignore_timestamps(mut self, ignore: bool) -> Self {
        self.ignore_timestamps = ignore;
        self
    }

    /// Replace the set of timestamp column names
    pub fn with_ignored_timestamp_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_timestamp_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the resource namespace
    pub fn with_resource_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.resource_namespace = namespace.into();
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Replace the relation field table
    pub fn with_relation_field_types(mut self, table: RelationFieldTypes) -> Self {
        self.relation_field_types = table;
        self
    }

    /// Whether automatic mode skips a column with this name
    pub fn skips_column(&self, name: &str) -> bool {
        self.ignore_timestamps && self.ignored_timestamp_columns.iter().any(|c| c == name)
    }
}

impl Validatable for GeneratorConfig {
    fn validate(&self) -> EngineResult<()> {
        if self.resource_namespace.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "resource_namespace cannot be empty".to_string(),
            ));
        }

        if self.ignored_timestamp_columns.iter().any(|c| c.trim().is_empty()) {
            return Err(EngineError::InvalidConfig(
                "ignored_timestamp_columns cannot contain blank names".to_string(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

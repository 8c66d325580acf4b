//! Core types used throughout novagen
//!
//! This module contains the schema-boundary types: column descriptors as
//! read from a model's table, and relation descriptors as declared on the
//! model.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

// ============================================================================
// Nullability
// ============================================================================

/// Column nullability, encoded at the schema boundary as `"YES"` / `"NO"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nullability {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl Nullability {
    /// The boundary encoding of this value
    pub fn as_str(&self) -> &'static str {
        match self {
            Nullability::Yes => "YES",
            Nullability::No => "NO",
        }
    }

    /// Whether the column accepts NULL
    pub fn is_nullable(&self) -> bool {
        matches!(self, Nullability::Yes)
    }
}

impl FromStr for Nullability {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YES" => Ok(Nullability::Yes),
            "NO" => Ok(Nullability::No),
            other => Err(EngineError::validation(format!(
                "nullable must be \"YES\" or \"NO\", got \"{}\"",
                other
            ))),
        }
    }
}

impl From<bool> for Nullability {
    fn from(nullable: bool) -> Self {
        if nullable {
            Nullability::Yes
        } else {
            Nullability::No
        }
    }
}

impl std::fmt::Display for Nullability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Column Descriptor
// ============================================================================

/// Metadata for one persisted column
///
/// The `raw_type` is the database type string exactly as the schema reports
/// it, decorations included (`varchar(191)`, `bigint(20) unsigned`). The
/// aliases accept the column headers of a MySQL `SHOW COLUMNS` dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    #[serde(alias = "Field")]
    pub name: String,

    /// Raw database type
    #[serde(rename = "type", alias = "Type")]
    pub raw_type: String,

    /// Whether the column is nullable
    #[serde(alias = "Null")]
    pub nullable: Nullability,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(
        name: impl Into<String>,
        raw_type: impl Into<String>,
        nullable: impl Into<Nullability>,
    ) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            nullable: nullable.into(),
        }
    }

    /// Create a NOT NULL column
    pub fn required(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self::new(name, raw_type, Nullability::No)
    }

    /// Create a nullable column
    pub fn optional(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self::new(name, raw_type, Nullability::Yes)
    }

    /// Whether the column accepts NULL
    pub fn is_nullable(&self) -> bool {
        self.nullable.is_nullable()
    }
}

// ============================================================================
// Relationship Types
// ============================================================================

/// Relation kinds a model may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    BelongsTo,
    HasOne,
    HasMany,
    BelongsToMany,
    HasOneThrough,
    HasManyThrough,
    MorphTo,
    MorphOne,
    MorphMany,
    MorphToMany,
    MorphedByMany,
}

impl RelationKind {
    /// The relation class name as the model declares it
    pub fn class_name(&self) -> &'static str {
        match self {
            RelationKind::BelongsTo => "BelongsTo",
            RelationKind::HasOne => "HasOne",
            RelationKind::HasMany => "HasMany",
            RelationKind::BelongsToMany => "BelongsToMany",
            RelationKind::HasOneThrough => "HasOneThrough",
            RelationKind::HasManyThrough => "HasManyThrough",
            RelationKind::MorphTo => "MorphTo",
            RelationKind::MorphOne => "MorphOne",
            RelationKind::MorphMany => "MorphMany",
            RelationKind::MorphToMany => "MorphToMany",
            RelationKind::MorphedByMany => "MorphedByMany",
        }
    }

    /// Whether the relation points at a collection of related records
    pub fn is_to_many(&self) -> bool {
        matches!(
            self,
            RelationKind::HasMany
                | RelationKind::BelongsToMany
                | RelationKind::HasManyThrough
                | RelationKind::MorphMany
                | RelationKind::MorphToMany
                | RelationKind::MorphedByMany
        )
    }

    /// Get all relation kinds
    pub fn all() -> &'static [RelationKind] {
        &[
            RelationKind::BelongsTo,
            RelationKind::HasOne,
            RelationKind::HasMany,
            RelationKind::BelongsToMany,
            RelationKind::HasOneThrough,
            RelationKind::HasManyThrough,
            RelationKind::MorphTo,
            RelationKind::MorphOne,
            RelationKind::MorphMany,
            RelationKind::MorphToMany,
            RelationKind::MorphedByMany,
        ]
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// A relation declared on a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    /// Relation (method) name on the model, e.g. `author`
    pub name: String,

    /// Kind of relation
    pub kind: RelationKind,

    /// Identity of the related model; empty for polymorphic `morph_to`
    #[serde(default)]
    pub related: String,
}

impl RelationDescriptor {
    /// Create a new relation descriptor
    pub fn new(name: impl Into<String>, kind: RelationKind, related: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            related: related.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nullability_boundary_encoding() {
        assert_eq!("YES".parse::<Nullability>().unwrap(), Nullability::Yes);
        assert_eq!("NO".parse::<Nullability>().unwrap(), Nullability::No);
        assert!("yes".parse::<Nullability>().is_err());
        assert_eq!(Nullability::No.to_string(), "NO");
    }

    #[test]
    fn test_column_descriptor_json() {
        let column: ColumnDescriptor =
            serde_json::from_str(r#"{"name":"title","type":"varchar(191)","nullable":"NO"}"#)
                .unwrap();
        assert_eq!(column, ColumnDescriptor::required("title", "varchar(191)"));
        assert!(!column.is_nullable());
    }

    #[test]
    fn test_column_descriptor_show_columns_headers() {
        let column: ColumnDescriptor = serde_json::from_str(
            r#"{"Field":"created_at","Type":"timestamp","Null":"YES"}"#,
        )
        .unwrap();
        assert_eq!(column.name, "created_at");
        assert!(column.is_nullable());
    }

    #[test]
    fn test_column_descriptor_rejects_boolean_nullable() {
        let res: Result<ColumnDescriptor, _> =
            serde_json::from_str(r#"{"name":"id","type":"int","nullable":false}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_relation_kind_serde() {
        let rel: RelationDescriptor = serde_json::from_str(
            r#"{"name":"author","kind":"belongs_to","related":"App\\Models\\User"}"#,
        )
        .unwrap();
        assert_eq!(rel.kind, RelationKind::BelongsTo);
        assert_eq!(rel.related, "App\\Models\\User");

        let rel: RelationDescriptor =
            serde_json::from_str(r#"{"name":"commentable","kind":"morph_to"}"#).unwrap();
        assert!(rel.related.is_empty());
    }

    #[test]
    fn test_relation_kind_cardinality() {
        assert!(RelationKind::HasMany.is_to_many());
        assert!(!RelationKind::BelongsTo.is_to_many());
        assert_eq!(RelationKind::all().len(), 11);
        assert_eq!(RelationKind::BelongsToMany.to_string(), "BelongsToMany");
    }
}

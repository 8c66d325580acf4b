//! Relationship fields
//!
//! Relations declared on a model become picker/list fields. The field type
//! for each relation kind comes from a [`RelationFieldTypes`] table so the
//! mapping can be replaced without touching the resolver.

use crate::field::RelationshipFieldSpec;
use indexmap::IndexMap;
use novagen_core::{EngineResult, RelationKind, SchemaProvider};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// RelationFieldTypes
// ============================================================================

/// Relation kind → field type table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationFieldTypes {
    types: IndexMap<RelationKind, String>,
}

impl RelationFieldTypes {
    /// A table with no mappings
    pub fn empty() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Map a kind to a field type, replacing any previous mapping
    pub fn with(mut self, kind: RelationKind, field_type: impl Into<String>) -> Self {
        self.types.insert(kind, field_type.into());
        self
    }

    /// Remove the mapping for a kind; relations of that kind are then skipped
    pub fn without(mut self, kind: RelationKind) -> Self {
        self.types.shift_remove(&kind);
        self
    }

    /// Field type for a relation kind; a blank entry disables the kind
    pub fn field_type(&self, kind: RelationKind) -> Option<&str> {
        self.types
            .get(&kind)
            .map(String::as_str)
            .filter(|t| !t.trim().is_empty())
    }

    /// Overlay another table on this one
    pub fn merge(&mut self, other: &RelationFieldTypes) {
        for (kind, field_type) in &other.types {
            self.types.insert(*kind, field_type.clone());
        }
    }
}

impl Default for RelationFieldTypes {
    /// Every relation kind maps to the field class of the same name
    fn default() -> Self {
        RelationKind::all()
            .iter()
            .fold(Self::empty(), |table, kind| table.with(*kind, kind.class_name()))
    }
}

// ============================================================================
// RelationshipResolver
// ============================================================================

/// Synthesizes relationship fields for a model
#[derive(Debug, Clone, Default)]
pub struct RelationshipResolver {
    field_types: RelationFieldTypes,
}

impl RelationshipResolver {
    pub fn new(field_types: RelationFieldTypes) -> Self {
        Self { field_types }
    }

    /// Relationship fields for `model`, in declaration order
    ///
    /// Relations whose name is in `taken` (column fields already generated),
    /// or repeats an earlier relation, are dropped. So are relations whose
    /// kind has no field type.
    pub fn resolve<P: SchemaProvider + ?Sized>(
        &self,
        provider: &P,
        model: &str,
        taken: &[String],
    ) -> EngineResult<Vec<RelationshipFieldSpec>> {
        let mut seen: HashSet<&str> = taken.iter().map(String::as_str).collect();
        let relations = provider.relations_of(model)?;
        let mut fields = Vec::with_capacity(relations.len());

        for relation in &relations {
            let Some(field_type) = self.field_types.field_type(relation.kind) else {
                tracing::debug!(
                    relation = %relation.name,
                    kind = %relation.kind,
                    "no field type mapped for relation kind, skipping"
                );
                continue;
            };
            if !seen.insert(relation.name.as_str()) {
                tracing::debug!(relation = %relation.name, "relation name already used by a field, skipping");
                continue;
            }
            fields.push(RelationshipFieldSpec::new(
                relation.name.clone(),
                field_type,
                relation.related.clone(),
                relation.kind,
            ));
        }

        Ok(fields)
    }

    /// Number of relations on `model` that would produce a field, ignoring
    /// name collisions
    pub fn count_mappable<P: SchemaProvider + ?Sized>(
        &self,
        provider: &P,
        model: &str,
    ) -> EngineResult<usize> {
        Ok(provider
            .relations_of(model)?
            .iter()
            .filter(|r| self.field_types.field_type(r.kind).is_some())
            .count())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use novagen_core::{ColumnDescriptor, EngineError, RelationDescriptor};
    use pretty_assertions::assert_eq;

    struct Relations(Vec<RelationDescriptor>);

    impl SchemaProvider for Relations {
        fn resolve_model(&self, identity: &str) -> EngineResult<String> {
            Err(EngineError::model_resolution(identity))
        }

        fn columns_of(&self, _model: &str) -> EngineResult<Vec<ColumnDescriptor>> {
            Ok(Vec::new())
        }

        fn relations_of(&self, _model: &str) -> EngineResult<Vec<RelationDescriptor>> {
            Ok(self.0.clone())
        }
    }

    fn post_relations() -> Relations {
        Relations(vec![
            RelationDescriptor::new("author", RelationKind::BelongsTo, "App\\Models\\User"),
            RelationDescriptor::new("comments", RelationKind::HasMany, "App\\Models\\Comment"),
            RelationDescriptor::new("tags", RelationKind::BelongsToMany, "App\\Models\\Tag"),
        ])
    }

    #[test]
    fn test_default_table_maps_every_kind() {
        let table = RelationFieldTypes::default();
        for kind in RelationKind::all() {
            assert_eq!(table.field_type(*kind), Some(kind.class_name()));
        }
    }

    #[test]
    fn test_resolve_in_declaration_order() {
        let resolver = RelationshipResolver::default();
        let fields = resolver.resolve(&post_relations(), "Post", &[]).unwrap();

        let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["author", "comments", "tags"]);
        assert_eq!(fields[0].field.type_option, "BelongsTo");
        assert_eq!(fields[1].related, "App\\Models\\Comment");
        assert_eq!(fields[2].kind, RelationKind::BelongsToMany);
    }

    #[test]
    fn test_column_names_take_precedence() {
        let resolver = RelationshipResolver::default();
        let taken = vec!["author".to_string(), "title".to_string()];
        let fields = resolver.resolve(&post_relations(), "Post", &taken).unwrap();

        let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["comments", "tags"]);
    }

    #[test]
    fn test_duplicate_relation_names_keep_first() {
        let provider = Relations(vec![
            RelationDescriptor::new("owner", RelationKind::BelongsTo, "App\\Models\\User"),
            RelationDescriptor::new("owner", RelationKind::MorphTo, ""),
        ]);
        let fields = RelationshipResolver::default()
            .resolve(&provider, "Post", &[])
            .unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].kind, RelationKind::BelongsTo);
    }

    #[test]
    fn test_injected_table() {
        let table = RelationFieldTypes::default()
            .with(RelationKind::BelongsToMany, "Tag")
            .without(RelationKind::HasMany);
        let resolver = RelationshipResolver::new(table);

        let fields = resolver.resolve(&post_relations(), "Post", &[]).unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["author", "tags"]);
        assert_eq!(fields[1].field.type_option, "Tag");
        assert_eq!(resolver.count_mappable(&post_relations(), "Post").unwrap(), 2);
    }

    #[test]
    fn test_table_from_toml() {
        let table: RelationFieldTypes = toml::from_str(
            r#"
            belongs_to = "BelongsTo"
            morph_to = "MorphTo"
            "#,
        )
        .unwrap();
        assert_eq!(table.field_type(RelationKind::MorphTo), Some("MorphTo"));
        assert_eq!(table.field_type(RelationKind::HasMany), None);
    }

    #[test]
    fn test_merge_overlays() {
        let mut table = RelationFieldTypes::default();
        table.merge(&RelationFieldTypes::empty().with(RelationKind::HasOne, "HasOneField"));
        assert_eq!(table.field_type(RelationKind::HasOne), Some("HasOneField"));
        assert_eq!(table.field_type(RelationKind::HasMany), Some("HasMany"));

        table.merge(&RelationFieldTypes::empty().with(RelationKind::MorphTo, ""));
        assert_eq!(table.field_type(RelationKind::MorphTo), None);
    }
}

//! Field specifications
//!
//! A [`FieldSpec`] describes one admin-UI input generated from a column.
//! A [`RelationshipFieldSpec`] is the same description synthesized from a
//! declared relation. Both end up in a [`FieldList`].

use novagen_core::RelationKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// FieldSpec
// ============================================================================

/// Generated description of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Attribute (column or relation) name
    pub name: String,

    /// Field type, e.g. `Text` or `BelongsTo`
    pub type_option: String,

    /// Validation rules, in the order they were given
    pub rules: Vec<String>,

    /// Visibility-exception methods, e.g. `hideFromIndex`
    pub visibility_methods: Vec<String>,

    /// Whether the field is sortable
    pub sortable: bool,
}

impl FieldSpec {
    /// Create a field with no rules, no visibility exceptions, not sortable
    pub fn new(name: impl Into<String>, type_option: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_option: type_option.into(),
            rules: Vec::new(),
            visibility_methods: Vec::new(),
            sortable: false,
        }
    }

    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }
}

// ============================================================================
// RelationshipFieldSpec
// ============================================================================

/// A field synthesized from a relation declared on the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipFieldSpec {
    #[serde(flatten)]
    pub field: FieldSpec,

    /// Identity of the related model
    pub related: String,

    /// Kind of relation the field was built from
    pub kind: RelationKind,
}

impl RelationshipFieldSpec {
    pub fn new(
        name: impl Into<String>,
        type_option: impl Into<String>,
        related: impl Into<String>,
        kind: RelationKind,
    ) -> Self {
        Self {
            field: FieldSpec::new(name, type_option),
            related: related.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.field.name
    }
}

// ============================================================================
// OutputField
// ============================================================================

/// One entry of the generated field list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum OutputField {
    Column(FieldSpec),
    Relationship(RelationshipFieldSpec),
}

impl OutputField {
    /// The common field description
    pub fn spec(&self) -> &FieldSpec {
        match self {
            OutputField::Column(spec) => spec,
            OutputField::Relationship(rel) => &rel.field,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec().name
    }

    pub fn type_option(&self) -> &str {
        &self.spec().type_option
    }

    pub fn is_relationship(&self) -> bool {
        matches!(self, OutputField::Relationship(_))
    }
}

impl From<FieldSpec> for OutputField {
    fn from(spec: FieldSpec) -> Self {
        OutputField::Column(spec)
    }
}

impl From<RelationshipFieldSpec> for OutputField {
    fn from(rel: RelationshipFieldSpec) -> Self {
        OutputField::Relationship(rel)
    }
}

// ============================================================================
// FieldList
// ============================================================================

/// The finished, ordered field list for one model
///
/// Column fields come first in generation order, relationship fields after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldList {
    /// Canonical model identity
    pub model: String,

    /// Generated fields
    pub fields: Vec<OutputField>,
}

impl FieldList {
    pub fn new(model: impl Into<String>, fields: Vec<OutputField>) -> Self {
        Self {
            model: model.into(),
            fields,
        }
    }

    /// Find a field by name
    pub fn get(&self, name: &str) -> Option<&OutputField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Field names, in order
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(OutputField::name).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Unqualified class name of the model (`App\Models\Post` → `Post`)
    pub fn model_basename(&self) -> &str {
        class_basename(&self.model)
    }
}

/// Last segment of a backslash-qualified class name
pub fn class_basename(identity: &str) -> &str {
    identity.rsplit('\\').next().unwrap_or(identity)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_spec_defaults() {
        let spec = FieldSpec::new("title", "Text");
        assert!(!spec.has_rules());
        assert!(spec.visibility_methods.is_empty());
        assert!(!spec.sortable);
    }

    #[test]
    fn test_output_field_accessors() {
        let column: OutputField = FieldSpec::new("title", "Text").into();
        let relation: OutputField =
            RelationshipFieldSpec::new("author", "BelongsTo", "App\\Models\\User", RelationKind::BelongsTo)
                .into();

        assert_eq!(column.name(), "title");
        assert!(!column.is_relationship());
        assert_eq!(relation.type_option(), "BelongsTo");
        assert!(relation.is_relationship());
    }

    #[test]
    fn test_field_list_lookup() {
        let list = FieldList::new(
            "App\\Models\\Post",
            vec![
                FieldSpec::new("title", "Text").into(),
                FieldSpec::new("id", "Number").into(),
            ],
        );
        assert_eq!(list.names(), vec!["title", "id"]);
        assert_eq!(list.get("id").unwrap().type_option(), "Number");
        assert!(list.get("body").is_none());
        assert_eq!(list.model_basename(), "Post");
    }

    #[test]
    fn test_output_field_json_shape() {
        let relation: OutputField =
            RelationshipFieldSpec::new("tags", "BelongsToMany", "App\\Models\\Tag", RelationKind::BelongsToMany)
                .into();
        let json = serde_json::to_value(&relation).unwrap();
        assert_eq!(json["source"], "relationship");
        assert_eq!(json["name"], "tags");
        assert_eq!(json["kind"], "belongs_to_many");
        assert_eq!(json["sortable"], false);
    }

    #[test]
    fn test_class_basename() {
        assert_eq!(class_basename("\\App\\User"), "User");
        assert_eq!(class_basename("Post"), "Post");
    }
}

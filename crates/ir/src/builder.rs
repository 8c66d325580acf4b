//! Rule & visibility builder
//!
//! [`FieldsBuilder`] accumulates the generated fields one at a time. The
//! field opened by the last [`add_field`](FieldsBuilder::add_field) is the
//! "current" field; rules, visibility methods and the sortable flag apply to
//! it. Opening the next field freezes the current one.

use crate::catalog::normalize_type;
use crate::field::{FieldSpec, OutputField, RelationshipFieldSpec};
use novagen_core::{ColumnDescriptor, EngineError, EngineResult};

// ============================================================================
// Visibility vocabulary
// ============================================================================

/// Recognized visibility-exception methods and what they do
pub const VISIBILITY_METHODS: &[(&str, &str)] = &[
    ("hideFromIndex", "Hide the field on the index listing"),
    ("hideFromDetail", "Hide the field on the detail page"),
    ("hideWhenCreating", "Hide the field on the creation form"),
    ("hideWhenUpdating", "Hide the field on the update form"),
    ("onlyOnIndex", "Show the field on the index listing only"),
    ("onlyOnDetail", "Show the field on the detail page only"),
    ("onlyOnForms", "Show the field on creation and update forms only"),
    ("exceptOnForms", "Show the field everywhere except forms"),
];

/// Whether `method` is a recognized visibility-exception method
pub fn is_visibility_method(method: &str) -> bool {
    VISIBILITY_METHODS.iter().any(|(name, _)| *name == method)
}

/// Split a `|`-separated list, trimming and dropping empty tokens
fn split_pipe(input: &str) -> impl Iterator<Item = &str> {
    input.split('|').map(str::trim).filter(|t| !t.is_empty())
}

// ============================================================================
// Rule derivation
// ============================================================================

/// Rules implied by a column's metadata
///
/// NOT NULL columns get `required`; `varchar` columns get `max:191`. The
/// result is `|`-joined, `required` first, ready for
/// [`FieldsBuilder::add_rules`].
pub fn derive_rules(column: &ColumnDescriptor) -> String {
    let mut rules = Vec::new();
    if !column.is_nullable() {
        rules.push("required");
    }
    if normalize_type(&column.raw_type) == "varchar" {
        rules.push("max:191");
    }
    rules.join("|")
}

// ============================================================================
// FieldsBuilder
// ============================================================================

/// Accumulates generated fields
#[derive(Debug, Default)]
pub struct FieldsBuilder {
    fields: Vec<OutputField>,
    current: Option<FieldSpec>,
}

impl FieldsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new field; the previous one is frozen
    pub fn add_field(&mut self, name: &str, type_option: &str) -> EngineResult<()> {
        if type_option.trim().is_empty() {
            return Err(EngineError::invalid_usage(format!(
                "field '{}' has no type; resolve a type before adding it",
                name
            )));
        }
        self.commit();
        self.current = Some(FieldSpec::new(name, type_option.trim()));
        Ok(())
    }

    /// Append `|`-separated rules to the current field
    ///
    /// Blank input is a no-op.
    pub fn add_rules(&mut self, rules: &str) -> EngineResult<()> {
        let mut tokens = split_pipe(rules).peekable();
        if tokens.peek().is_none() {
            return Ok(());
        }
        let current = self.current_mut("add_rules")?;
        current.rules.extend(tokens.map(str::to_string));
        Ok(())
    }

    /// Append `|`-separated visibility methods to the current field
    ///
    /// Returns `false` and appends nothing unless every token is a
    /// recognized method. An input with no tokens at all is rejected.
    pub fn add_visibility_methods(&mut self, methods: &str) -> EngineResult<bool> {
        let tokens: Vec<&str> = split_pipe(methods).collect();
        let current = self.current_mut("add_visibility_methods")?;
        if tokens.is_empty() || !tokens.iter().all(|t| is_visibility_method(t)) {
            return Ok(false);
        }
        current
            .visibility_methods
            .extend(tokens.into_iter().map(str::to_string));
        Ok(true)
    }

    /// Tokens of `methods` that are not recognized visibility methods
    pub fn unrecognized_visibility_methods(methods: &str) -> Vec<String> {
        split_pipe(methods)
            .filter(|t| !is_visibility_method(t))
            .map(str::to_string)
            .collect()
    }

    /// The visibility vocabulary as a displayable table
    pub fn available_visibility_methods() -> (Vec<String>, Vec<Vec<String>>) {
        let headers = vec!["Method".to_string(), "Description".to_string()];
        let rows = VISIBILITY_METHODS
            .iter()
            .map(|(name, description)| vec![name.to_string(), description.to_string()])
            .collect();
        (headers, rows)
    }

    /// Mark the current field sortable
    pub fn mark_sortable(&mut self) -> EngineResult<()> {
        self.current_mut("mark_sortable")?.sortable = true;
        Ok(())
    }

    /// Append a relationship field; the current field is frozen first
    pub fn add_relationship(&mut self, field: RelationshipFieldSpec) {
        self.commit();
        self.fields.push(field.into());
    }

    /// Names of every field registered so far, current one included
    pub fn field_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| f.name().to_string())
            .chain(self.current.iter().map(|f| f.name.clone()))
            .collect()
    }

    /// The field currently being built
    pub fn current(&self) -> Option<&FieldSpec> {
        self.current.as_ref()
    }

    pub fn len(&self) -> usize {
        self.fields.len() + usize::from(self.current.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close the builder and return the fields in the order they were added
    pub fn finalize(mut self) -> Vec<OutputField> {
        self.commit();
        self.fields
    }

    fn commit(&mut self) {
        if let Some(spec) = self.current.take() {
            self.fields.push(spec.into());
        }
    }

    fn current_mut(&mut self, operation: &str) -> EngineResult<&mut FieldSpec> {
        self.current.as_mut().ok_or_else(|| {
            EngineError::invalid_usage(format!("{} called before any field was added", operation))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

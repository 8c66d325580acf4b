//! # Emission
//!
//! Renders a finished [`FieldList`] either as the `fields()` method of an
//! admin resource or as JSON.

use chrono::{DateTime, Utc};
use heck::ToTitleCase;
use novagen_core::EngineResult;
use novagen_ir::{FieldList, FieldSpec, OutputField, class_basename};
use std::collections::BTreeSet;

use crate::config::{GeneratorConfig, OutputFormat};

/// Namespace every field class lives in
pub const FIELDS_NAMESPACE: &str = "Laravel\\Nova\\Fields";

/// Render a field list in the configured format
pub fn render(list: &FieldList, config: &GeneratorConfig) -> EngineResult<String> {
    match config.format {
        OutputFormat::Php => Ok(render_php(list, &config.resource_namespace)),
        OutputFormat::Json => render_json(list),
    }
}

/// The field list as pretty-printed JSON
pub fn render_json(list: &FieldList) -> EngineResult<String> {
    let mut out = serde_json::to_string_pretty(list)?;
    out.push('\n');
    Ok(out)
}

/// The field list as a resource `fields()` method, stamped with the current time
pub fn render_php(list: &FieldList, resource_namespace: &str) -> String {
    render_php_at(list, resource_namespace, Utc::now())
}

/// Same as [`render_php`] with an explicit timestamp
pub fn render_php_at(
    list: &FieldList,
    resource_namespace: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::with_capacity(256 + list.len() * 128);

    out.push_str("<?php\n\n");
    out.push_str(&format!(
        "// Fields for {}, generated by novagen at {}\n\n",
        list.model,
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out.push_str("use Illuminate\\Http\\Request;\n");
    let classes: BTreeSet<&str> = list.fields.iter().map(OutputField::type_option).collect();
    for class in classes {
        out.push_str(&format!("use {}\\{};\n", FIELDS_NAMESPACE, class));
    }
    out.push('\n');

    out.push_str("public function fields(Request $request)\n{\n");
    out.push_str("    return [\n");
    let entries: Vec<String> = list
        .fields
        .iter()
        .map(|field| render_field(field, resource_namespace))
        .collect();
    out.push_str(&entries.join("\n"));
    out.push_str("    ];\n}\n");
    out
}

fn render_field(field: &OutputField, resource_namespace: &str) -> String {
    let spec = field.spec();
    let mut args = vec![php_string(&label(&spec.name)), php_string(&spec.name)];
    if let OutputField::Relationship(rel) = field {
        if !rel.related.trim().is_empty() {
            args.push(resource_class(resource_namespace, &rel.related));
        }
    }

    let mut out = format!("        {}::make({})", spec.type_option, args.join(", "));
    for call in modifier_calls(spec) {
        out.push_str("\n            ->");
        out.push_str(&call);
    }
    out.push_str(",\n");
    out
}

/// Chained calls after `make()`: rules, visibility exceptions, sortable
fn modifier_calls(spec: &FieldSpec) -> Vec<String> {
    let mut calls = Vec::new();
    if spec.has_rules() {
        let rules: Vec<String> = spec.rules.iter().map(|r| php_string(r)).collect();
        calls.push(format!("rules({})", rules.join(", ")));
    }
    calls.extend(spec.visibility_methods.iter().map(|m| format!("{}()", m)));
    if spec.sortable {
        calls.push("sortable()".to_string());
    }
    calls
}

/// Human label for an attribute name
///
/// `created_at` → `Created At`; a bare `id` stays an acronym.
pub fn label(attribute: &str) -> String {
    if attribute.eq_ignore_ascii_case("id") {
        return "ID".to_string();
    }
    attribute.to_title_case()
}

/// `\App\Nova\User::class` for a related model `App\Models\User`
fn resource_class(resource_namespace: &str, related: &str) -> String {
    format!(
        "\\{}\\{}::class",
        resource_namespace.trim_matches('\\'),
        class_basename(related)
    )
}

/// Single-quoted PHP string literal
fn php_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

// ============================================================================
// Tests
// ============================================================================
